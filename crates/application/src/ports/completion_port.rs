//! Completion port - Interface for chat completion

use async_trait::async_trait;
use domain::ChatMessage;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for chat completion providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send the ordered messages and return the content of the first choice
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ApplicationError>;
}
