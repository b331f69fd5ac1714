//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to speech service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Invalid audio format or corrupted data
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// Transcription failed
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid response from service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during processing
    #[error("Speech processing timeout")]
    Timeout,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The audio body broke off while streaming
    #[error("Stream error: {0}")]
    Stream(String),
}

impl From<reqwest::Error> for SpeechError {
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
