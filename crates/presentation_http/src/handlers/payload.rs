//! Multipart payload of a voice reply request
//!
//! The form carries exactly one `input` field (typed text, or an audio file
//! when the part has a file name) and any number of `message` fields, each a
//! JSON encoded prior turn. Other fields are skipped.

use axum::extract::{Multipart, multipart::MultipartError};
use domain::{AudioClip, ConversationTurn, DomainError, UserInput};
use thiserror::Error;
use tracing::debug;

/// Form field holding the new turn
pub const INPUT_FIELD: &str = "input";

/// Form field holding one prior turn
pub const MESSAGE_FIELD: &str = "message";

const DEFAULT_AUDIO_MIME: &str = "application/octet-stream";

/// Why a request body could not be turned into a payload
#[derive(Debug, Error)]
pub enum PayloadError {
    /// No usable `input` field
    #[error("missing input")]
    MissingInput,

    /// More than one `input` field
    #[error("duplicate input")]
    DuplicateInput,

    /// A `message` field is not a valid turn
    #[error("invalid message: {0}")]
    InvalidMessage(#[from] DomainError),

    /// The body is not readable multipart form data
    #[error("malformed multipart body: {0}")]
    Multipart(String),
}

impl From<MultipartError> for PayloadError {
    fn from(err: MultipartError) -> Self {
        Self::Multipart(err.body_text())
    }
}

/// Validated request payload
#[derive(Debug, Clone)]
pub struct IncomingPayload {
    /// The caller's new turn
    pub input: UserInput,
    /// Prior turns in the order they were sent
    pub history: Vec<ConversationTurn>,
}

/// Read and validate the whole form
pub async fn parse_payload(mut multipart: Multipart) -> Result<IncomingPayload, PayloadError> {
    let mut input: Option<UserInput> = None;
    let mut seen_input = false;
    let mut history = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            INPUT_FIELD => {
                if seen_input {
                    return Err(PayloadError::DuplicateInput);
                }
                seen_input = true;

                if let Some(file_name) = field.file_name().map(ToString::to_string) {
                    let mime_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_AUDIO_MIME)
                        .to_string();
                    let data = field.bytes().await?;
                    if !data.is_empty() {
                        input = Some(UserInput::Audio(AudioClip::new(data, file_name, mime_type)));
                    }
                } else {
                    let text = field.text().await?;
                    if !text.is_empty() {
                        input = Some(UserInput::Text(text));
                    }
                }
            },
            MESSAGE_FIELD => {
                let raw = field.text().await?;
                history.push(ConversationTurn::from_json(&raw)?);
            },
            other => {
                debug!(field = other, "Skipping unknown form field");
            },
        }
    }

    let input = input.ok_or(PayloadError::MissingInput)?;
    Ok(IncomingPayload { input, history })
}
