//! Audio types shared by the speech ports

use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;

use crate::error::SpeechError;

/// An uploaded audio clip awaiting transcription
#[derive(Debug, Clone)]
pub struct AudioData {
    data: Bytes,
    filename: String,
    mime_type: String,
}

impl AudioData {
    /// Create a clip from raw bytes plus the name and MIME type the client sent
    pub fn new(
        data: impl Into<Bytes>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            data: data.into(),
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Consume and return the raw bytes
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// File name sent with the upload
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// MIME type sent with the upload
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Result of a transcription
#[derive(Debug, Clone, PartialEq)]
pub struct Transcription {
    /// Transcribed text, exactly as returned by the provider
    pub text: String,
    /// Detected language, when the provider reports one
    pub language: Option<String>,
    /// Duration of the clip in milliseconds, when reported
    pub duration_ms: Option<u64>,
}

impl Transcription {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            duration_ms: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Streamed audio body
pub type AudioStream = Pin<Box<dyn Stream<Item = Result<Bytes, SpeechError>> + Send>>;

/// Synthesized speech ready to be forwarded to the caller
pub struct SynthesizedAudio {
    /// MIME type of the body
    pub content_type: String,
    /// Audio bytes, passed through as they arrive
    pub stream: AudioStream,
}

impl SynthesizedAudio {
    pub fn new(content_type: impl Into<String>, stream: AudioStream) -> Self {
        Self {
            content_type: content_type.into(),
            stream,
        }
    }
}

impl fmt::Debug for SynthesizedAudio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynthesizedAudio")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}
