//! Resolve the caller's input to the text of the new user turn

use std::{fmt, sync::Arc};

use domain::UserInput;
use tracing::{debug, instrument};

use crate::ports::TranscriptionPort;

/// Turns typed text or an uploaded clip into a transcript
pub struct TranscriptResolver {
    transcription: Arc<dyn TranscriptionPort>,
}

impl fmt::Debug for TranscriptResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptResolver").finish_non_exhaustive()
    }
}

impl TranscriptResolver {
    pub fn new(transcription: Arc<dyn TranscriptionPort>) -> Self {
        Self { transcription }
    }

    /// Resolve the input
    ///
    /// Text is returned unchanged. Audio is transcribed and trimmed; a blank
    /// transcript and a provider failure both yield `None`, and the failure
    /// reason goes no further than a debug log.
    #[instrument(skip_all, fields(input = input.kind()))]
    pub async fn resolve(&self, input: UserInput) -> Option<String> {
        match input {
            UserInput::Text(text) => Some(text),
            UserInput::Audio(clip) => {
                let outcome = self.transcription.transcribe(clip).await;
                match outcome {
                    Ok(text) => {
                        let trimmed = text.trim();
                        if trimmed.is_empty() {
                            debug!("Transcription was blank");
                            None
                        } else {
                            Some(trimmed.to_string())
                        }
                    },
                    Err(e) => {
                        debug!(error = %e, "Transcription failed");
                        None
                    },
                }
            },
        }
    }
}
