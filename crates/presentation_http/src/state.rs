//! Application state shared across handlers

use std::sync::Arc;

use application::VoiceReplyService;

/// Default request body limit for `/api`
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// The voice reply pipeline
    pub voice_reply: Arc<VoiceReplyService>,
    /// Largest accepted `/api` request body
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(voice_reply: Arc<VoiceReplyService>) -> Self {
        Self {
            voice_reply,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    #[must_use]
    pub const fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
