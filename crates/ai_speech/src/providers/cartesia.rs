//! Cartesia Sonic speech synthesis
//!
//! Calls `POST /tts/bytes` and hands the response body back as a stream so
//! audio reaches the caller as soon as the provider produces it.

use std::time::Duration;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{debug, error, instrument};

use crate::config::SynthesisConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::SynthesizedAudio;

/// Cartesia text-to-speech client
#[derive(Debug, Clone)]
pub struct CartesiaSynthesizer {
    client: Client,
    config: SynthesisConfig,
}

impl CartesiaSynthesizer {
    /// Create a new synthesizer
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SynthesisConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
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

    fn tts_url(&self) -> String {
        format!("{}/tts/bytes", self.config.base_url.trim_end_matches('/'))
    }

    fn request_body<'a>(&'a self, transcript: &'a str) -> TtsRequest<'a> {
        TtsRequest {
            model_id: &self.config.model_id,
            transcript,
            voice: TtsVoice {
                mode: "id",
                id: &self.config.voice_id,
                experimental_controls: ExperimentalControls {
                    speed: self.config.speed,
                },
            },
            output_format: OutputFormat {
                container: &self.config.container,
                encoding: &self.config.encoding,
                sample_rate: self.config.sample_rate,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    model_id: &'a str,
    transcript: &'a str,
    voice: TtsVoice<'a>,
    output_format: OutputFormat<'a>,
}

#[derive(Debug, Serialize)]
struct TtsVoice<'a> {
    mode: &'static str,
    id: &'a str,
    #[serde(rename = "__experimental_controls")]
    experimental_controls: ExperimentalControls,
}

#[derive(Debug, Serialize)]
struct ExperimentalControls {
    speed: f32,
}

#[derive(Debug, Serialize)]
struct OutputFormat<'a> {
    container: &'a str,
    encoding: &'a str,
    sample_rate: u32,
}

#[async_trait]
impl TextToSpeech for CartesiaSynthesizer {
    #[instrument(skip(self, text), fields(text_len = text.len(), voice = %self.config.voice_id))]
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError> {
        debug!("Requesting speech synthesis");

        let response = self
            .client
            .post(self.tts_url())
            .header("Cartesia-Version", &self.config.api_version)
            .header("X-API-Key", self.api_key())
            .json(&self.request_body(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Voice synthesis failed");
            return Err(SpeechError::SynthesisFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let stream = response
            .bytes_stream()
            .map_err(|e| SpeechError::Stream(e.to_string()))
            .boxed();

        Ok(SynthesizedAudio::new(self.config.content_type(), stream))
    }

    fn model_name(&self) -> &str {
        &self.config.model_id
    }

    fn voice_id(&self) -> &str {
        &self.config.voice_id
    }
}
