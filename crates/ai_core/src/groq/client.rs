//! Groq chat completions client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse};

/// Chat completion engine backed by Groq
#[derive(Debug)]
pub struct GroqInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl GroqInferenceEngine {
    /// Create a new Groq inference engine
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            "Initialized Groq inference engine"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Get the model to use for a request
    fn resolve_model<'a>(&'a self, request: &'a InferenceRequest) -> &'a str {
        request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [InferenceMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl InferenceEngine for GroqInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request), messages = request.messages.len()))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        let model = self.resolve_model(&request).to_string();
        let body = ChatCompletionRequest {
            model: &model,
            messages: &request.messages,
        };

        let mut builder = self.client.post(self.api_url("chat/completions")).json(&body);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        debug!("Sending chat completion request");
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Chat completion request failed");
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    InferenceError::Unauthorized(body)
                },
                _ => InferenceError::ServerError(format!("Status {status}: {body}")),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::InvalidResponse("no choices returned".to_string()))?;

        let content = choice.message.content.ok_or_else(|| {
            InferenceError::InvalidResponse("first choice has no content".to_string())
        })?;

        debug!(chars = content.len(), "Chat completion received");

        Ok(InferenceResponse {
            content,
            model: parsed.model.unwrap_or(model),
            finish_reason: choice.finish_reason,
        })
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}
