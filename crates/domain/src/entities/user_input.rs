//! The caller's new turn, as typed text or as an uploaded audio clip

use std::fmt;

use bytes::Bytes;

/// An uploaded audio clip
#[derive(Clone, PartialEq, Eq)]
pub struct AudioClip {
    /// Raw audio bytes as uploaded
    pub data: Bytes,
    /// File name supplied by the client
    pub filename: String,
    /// MIME type supplied by the client
    pub mime_type: String,
}

impl AudioClip {
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

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for AudioClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioClip")
            .field("bytes", &self.data.len())
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .finish()
    }
}

/// Exactly one of typed text or an audio clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// Typed text, used verbatim
    Text(String),
    /// Spoken audio that still has to be transcribed
    Audio(AudioClip),
}

impl UserInput {
    /// Short label for logging
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Audio(_) => "audio",
        }
    }
}
