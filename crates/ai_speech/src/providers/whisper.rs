//! Whisper transcription over an OpenAI-compatible API
//!
//! Used with Groq's hosted `whisper-large-v3`. The upload is forwarded with
//! the client-supplied file name and MIME type; no conversion happens here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::TranscriptionConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::{AudioData, Transcription};

/// Whisper speech-to-text client
#[derive(Debug, Clone)]
pub struct WhisperTranscriber {
    client: Client,
    config: TranscriptionConfig,
}

impl WhisperTranscriber {
    /// Create a new transcriber
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: TranscriptionConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config
            .api_key
            .as_ref()
            .map_or("", |key| key.expose_secret())
    }

    fn stt_url(&self) -> String {
        format!(
            "{}/audio/transcriptions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

/// Whisper transcription response
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// OpenAI-style API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

#[async_trait]
impl SpeechToText for WhisperTranscriber {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes(), mime = %audio.mime_type()))]
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        let filename = if audio.filename().is_empty() {
            "audio".to_string()
        } else {
            audio.filename().to_string()
        };
        let mime_type = audio.mime_type().to_string();
        let length = audio.size_bytes() as u64;

        let mut file_part = Part::stream_with_length(audio.into_data(), length).file_name(filename);
        if !mime_type.is_empty() {
            file_part = file_part
                .mime_str(&mime_type)
                .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;
        }

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone());

        let response = self
            .client
            .post(self.stt_url())
            .bearer_auth(self.api_key())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(SpeechError::RateLimited);
            }

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return match api_error.error.code.as_deref() {
                    Some("rate_limit_exceeded") => Err(SpeechError::RateLimited),
                    _ => Err(SpeechError::TranscriptionFailed(api_error.error.message)),
                };
            }

            return Err(SpeechError::TranscriptionFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let whisper_response: WhisperResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        debug!(
            text_len = whisper_response.text.len(),
            language = ?whisper_response.language,
            "Transcription complete"
        );

        let mut transcription = Transcription::new(whisper_response.text);

        if let Some(lang) = whisper_response.language {
            transcription = transcription.with_language(lang);
        }

        if let Some(duration) = whisper_response.duration {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let duration_ms = (duration * 1000.0) as u64;
            transcription = transcription.with_duration(duration_ms);
        }

        Ok(transcription)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
