//! Synthesis port - Interface for text-to-speech

use std::fmt;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Audio bytes as they arrive from the provider
pub type AudioByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, ApplicationError>> + Send>>;

/// Synthesized reply audio
pub struct SynthesizedSpeech {
    /// MIME type of the audio body
    pub content_type: String,
    /// Streamed audio body
    pub body: AudioByteStream,
}

impl SynthesizedSpeech {
    pub fn new(content_type: impl Into<String>, body: AudioByteStream) -> Self {
        Self {
            content_type: content_type.into(),
            body,
        }
    }
}

impl fmt::Debug for SynthesizedSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynthesizedSpeech")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Port for speech synthesis providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SynthesisPort: Send + Sync {
    /// Synthesize `text` with the configured voice
    ///
    /// Resolves as soon as the provider accepted the request; a non-success
    /// provider status is an error and yields no audio.
    async fn synthesize(&self, text: String) -> Result<SynthesizedSpeech, ApplicationError>;
}
