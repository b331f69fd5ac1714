//! Build the completion request and extract the reply

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::{CallerContext, ChatMessage, ConversationTurn};
use tracing::{debug, instrument};

use super::system_prompt::SystemPrompt;
use crate::error::ApplicationError;
use crate::ports::CompletionPort;

/// Produces the assistant's reply for one turn
pub struct ReplyGenerator {
    completion: Arc<dyn CompletionPort>,
    prompt: SystemPrompt,
}

impl fmt::Debug for ReplyGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplyGenerator")
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl ReplyGenerator {
    pub fn new(completion: Arc<dyn CompletionPort>, prompt: SystemPrompt) -> Self {
        Self { completion, prompt }
    }

    /// Messages sent to the provider: system, then history in order, then the new turn
    pub fn build_messages(
        &self,
        transcript: &str,
        history: &[ConversationTurn],
        caller: &CallerContext,
        now: DateTime<Utc>,
    ) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(self.prompt.render(caller, now)));
        messages.extend(history.iter().map(ChatMessage::from));
        messages.push(ChatMessage::user(transcript));
        messages
    }

    #[instrument(skip_all, fields(history = history.len()))]
    pub async fn generate(
        &self,
        transcript: &str,
        history: &[ConversationTurn],
        caller: &CallerContext,
    ) -> Result<String, ApplicationError> {
        let messages = self.build_messages(transcript, history, caller, Utc::now());
        debug!(messages = messages.len(), "Requesting completion");
        self.completion.complete(messages).await
    }
}
