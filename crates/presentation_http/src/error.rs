//! API error handling
//!
//! Every failure is answered with a short plain-text body. Provider details
//! are logged where they happen and never reach the caller.

use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

use crate::handlers::payload::PayloadError;

/// Errors returned by the HTTP layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The form was missing, malformed or had an invalid turn
    #[error("Invalid request")]
    InvalidRequest,

    /// No transcript could be obtained from the uploaded audio
    #[error("Invalid audio")]
    InvalidAudio,

    /// The completion provider failed
    #[error("Reply generation failed")]
    ReplyGeneration,

    /// The synthesis provider refused or failed
    #[error("Voice synthesis failed")]
    VoiceSynthesis,

    /// Anything else
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::InvalidAudio => StatusCode::BAD_REQUEST,
            Self::ReplyGeneration | Self::VoiceSynthesis | Self::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // &'static str responds as text/plain; charset=utf-8
        let body: &'static str = match self {
            Self::InvalidRequest => "Invalid request",
            Self::InvalidAudio => "Invalid audio",
            Self::ReplyGeneration => "Reply generation failed",
            Self::VoiceSynthesis => "Voice synthesis failed",
            Self::Internal => "Internal server error",
        };
        (self.status(), body).into_response()
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        debug!(error = %err, "Rejected request payload");
        Self::InvalidRequest
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidAudio | ApplicationError::Transcription(_) => {
                Self::InvalidAudio
            },
            ApplicationError::Completion(_) => Self::ReplyGeneration,
            ApplicationError::Synthesis(_) | ApplicationError::Stream(_) => Self::VoiceSynthesis,
            ApplicationError::Configuration(_) => Self::Internal,
        }
    }
}
