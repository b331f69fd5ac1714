//! Speech adapters - Implement the transcription and synthesis ports using ai_speech

use std::{fmt, sync::Arc};

use ai_speech::{
    AudioData, CartesiaSynthesizer, SpeechError, SpeechToText, SynthesisConfig, TextToSpeech,
    TranscriptionConfig, WhisperTranscriber,
};
use application::error::ApplicationError;
use application::ports::{SynthesisPort, SynthesizedSpeech, TranscriptionPort};
use async_trait::async_trait;
use domain::AudioClip;
use futures::TryStreamExt;
use tracing::{debug, instrument};

/// Adapter from the transcription port to a speech-to-text provider
pub struct TranscriptionAdapter {
    provider: Arc<dyn SpeechToText>,
}

impl fmt::Debug for TranscriptionAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptionAdapter")
            .field("model", &self.provider.model_name())
            .finish()
    }
}

impl TranscriptionAdapter {
    /// Create an adapter backed by Whisper
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: TranscriptionConfig) -> Result<Self, ApplicationError> {
        let provider = WhisperTranscriber::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    pub fn with_provider(provider: Arc<dyn SpeechToText>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl TranscriptionPort for TranscriptionAdapter {
    #[instrument(skip(self, clip), fields(audio_size = clip.len()))]
    async fn transcribe(&self, clip: AudioClip) -> Result<String, ApplicationError> {
        let audio = AudioData::new(clip.data, clip.filename, clip.mime_type);

        let transcription = self
            .provider
            .transcribe(audio)
            .await
            .map_err(|e| ApplicationError::Transcription(e.to_string()))?;

        debug!(
            text_len = transcription.text.len(),
            language = ?transcription.language,
            "Transcription received"
        );

        Ok(transcription.text)
    }
}

/// Adapter from the synthesis port to a text-to-speech provider
pub struct SynthesisAdapter {
    provider: Arc<dyn TextToSpeech>,
}

impl fmt::Debug for SynthesisAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynthesisAdapter")
            .field("model", &self.provider.model_name())
            .field("voice", &self.provider.voice_id())
            .finish()
    }
}

impl SynthesisAdapter {
    /// Create an adapter backed by Cartesia
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SynthesisConfig) -> Result<Self, ApplicationError> {
        let provider = CartesiaSynthesizer::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    pub fn with_provider(provider: Arc<dyn TextToSpeech>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl SynthesisPort for SynthesisAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(&self, text: String) -> Result<SynthesizedSpeech, ApplicationError> {
        let audio = self
            .provider
            .synthesize(&text)
            .await
            .map_err(|e| ApplicationError::Synthesis(e.to_string()))?;

        let body = audio
            .stream
            .map_err(|e| ApplicationError::Stream(e.to_string()));

        Ok(SynthesizedSpeech::new(audio.content_type, Box::pin(body)))
    }
}
