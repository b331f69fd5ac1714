//! Port definitions for inference engine
//!
//! Defines the traits (ports) that inference adapters must implement.

use async_trait::async_trait;
use domain::ChatMessage;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Request for inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Messages in the conversation, in order
    pub messages: Vec<InferenceMessage>,
    /// Model to use (overrides config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// A message in the inference request (OpenAI-compatible format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceMessage {
    pub role: String,
    pub content: String,
}

impl From<&ChatMessage> for InferenceMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_string(),
            content: msg.content.clone(),
        }
    }
}

impl InferenceRequest {
    /// Create a request from an ordered list of chat messages
    pub fn from_messages(messages: &[ChatMessage]) -> Self {
        Self {
            messages: messages.iter().map(InferenceMessage::from).collect(),
            model: None,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Response from inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceResponse {
    /// Generated content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Port for inference engine implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Generate a complete response
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError>;

    /// Get the current default model
    fn default_model(&self) -> &str;
}
