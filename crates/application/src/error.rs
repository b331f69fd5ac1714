//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No usable transcript could be obtained from the uploaded audio
    #[error("Invalid audio")]
    InvalidAudio,

    /// Transcription provider error
    #[error("Transcription error: {0}")]
    Transcription(String),

    /// Chat completion provider error
    #[error("Completion error: {0}")]
    Completion(String),

    /// Speech synthesis provider error
    #[error("Synthesis error: {0}")]
    Synthesis(String),

    /// The synthesized audio stream broke off
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}
