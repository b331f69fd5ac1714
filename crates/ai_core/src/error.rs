//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to inference server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to inference server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed or carried no content
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout")]
    Timeout,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Credentials rejected by the provider
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
