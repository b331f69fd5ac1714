//! Inference adapter - Implements CompletionPort using ai_core

use std::{fmt, sync::Arc, time::Instant};

use ai_core::{GroqInferenceEngine, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest};
use application::{error::ApplicationError, ports::CompletionPort};
use async_trait::async_trait;
use domain::ChatMessage;
use tracing::{debug, instrument};

/// Adapter from the completion port to an inference engine
pub struct InferenceCompletionAdapter {
    engine: Arc<dyn InferenceEngine>,
}

impl fmt::Debug for InferenceCompletionAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceCompletionAdapter")
            .field("model", &self.engine.default_model())
            .finish()
    }
}

impl InferenceCompletionAdapter {
    /// Create an adapter backed by Groq
    pub fn new(config: InferenceConfig) -> Result<Self, ApplicationError> {
        let engine =
            GroqInferenceEngine::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_engine(Arc::new(engine)))
    }

    /// Wrap an existing engine
    pub fn with_engine(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }

    pub fn model(&self) -> &str {
        self.engine.default_model()
    }

    fn map_error(e: InferenceError) -> ApplicationError {
        ApplicationError::Completion(e.to_string())
    }
}

#[async_trait]
impl CompletionPort for InferenceCompletionAdapter {
    #[instrument(skip(self, messages), fields(messages = messages.len()))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ApplicationError> {
        let start = Instant::now();
        let request = InferenceRequest::from_messages(&messages);

        let response = self.engine.generate(request).await.map_err(Self::map_error)?;

        debug!(
            model = %response.model,
            finish_reason = response.finish_reason.as_deref().unwrap_or("none"),
            latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Completion received"
        );

        Ok(response.content)
    }
}
