//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `assistant`: system prompt template
//!
//! Provider sections reuse the client configs from `ai_core` and `ai_speech`.
//!
//! Sources, lowest precedence first: built-in defaults, `config.toml`,
//! `VOICE_REPLY__SECTION__KEY` environment variables. The provider keys are
//! finally filled from `GROQ_API_KEY` / `CARTESIA_API_KEY` when still unset.

mod assistant;
mod server;

use ai_core::InferenceConfig;
use ai_speech::{SynthesisConfig, TranscriptionConfig};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub use assistant::AssistantConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "VOICE_REPLY";

/// Well-known variable holding the Groq key (transcription and completion)
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Well-known variable holding the Cartesia key (synthesis)
pub const CARTESIA_API_KEY_VAR: &str = "CARTESIA_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Assistant persona
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Chat completion provider
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Speech-to-text provider
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Text-to-speech provider
    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut config = Self::from_sources(Some("config"), None)?;
        config.apply_provider_keys(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Build from an optional config file and environment
    ///
    /// `env` replaces the process environment when given.
    pub fn from_sources(
        file: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        let builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .source(env),
        );

        builder.build()?.try_deserialize()
    }

    /// Fill provider API keys that are still unset from well-known variables
    pub fn apply_provider_keys(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup_secret = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .map(SecretString::from)
        };

        if self.inference.api_key.is_none() {
            self.inference.api_key = lookup_secret(GROQ_API_KEY_VAR);
        }
        if self.transcription.api_key.is_none() {
            self.transcription.api_key = lookup_secret(GROQ_API_KEY_VAR);
        }
        if self.synthesis.api_key.is_none() {
            self.synthesis.api_key = lookup_secret(CARTESIA_API_KEY_VAR);
        }
    }

    /// Check that the service can start with this configuration
    ///
    /// All problems are reported together, separated by `; `.
    pub fn validate(&self) -> Result<(), String> {
        let mut problems = Vec::new();

        if self.server.max_body_bytes == 0 {
            problems.push("server max_body_bytes must be greater than 0".to_string());
        }
        if let Err(e) = self.inference.validate() {
            problems.push(e);
        }
        if let Err(e) = self.transcription.validate() {
            problems.push(e);
        }
        if let Err(e) = self.synthesis.validate() {
            problems.push(e);
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}
