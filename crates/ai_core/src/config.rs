//! Configuration for the chat completion engine

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for chat completions
    #[serde(default = "default_model", alias = "model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Bearer token for the provider
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama3-8b-8192".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            api_key: None,
        }
    }
}

impl InferenceConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("inference base_url is empty".to_string());
        }
        if self.default_model.trim().is_empty() {
            return Err("inference model is empty".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("inference timeout_ms must be greater than zero".to_string());
        }
        if self.api_key.is_none() {
            return Err("inference api_key is not set (GROQ_API_KEY)".to_string());
        }
        Ok(())
    }
}
