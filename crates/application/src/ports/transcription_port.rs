//! Transcription port - Interface for speech-to-text

use async_trait::async_trait;
use domain::AudioClip;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for turning an uploaded clip into text
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranscriptionPort: Send + Sync {
    /// Transcribe the clip
    ///
    /// Returns the provider text untouched; trimming and blank handling are
    /// left to the caller.
    async fn transcribe(&self, clip: AudioClip) -> Result<String, ApplicationError>;
}
