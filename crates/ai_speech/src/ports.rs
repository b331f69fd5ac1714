//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{AudioData, SynthesizedAudio, Transcription};

/// Port for Speech-to-Text (STT) implementations
///
/// Implementations of this trait convert an uploaded clip to a transcription.
///
/// # Example
///
/// ```ignore
/// use ai_speech::{SpeechToText, AudioData};
///
/// async fn transcribe_upload(
///     stt: &impl SpeechToText,
///     audio: AudioData,
/// ) -> Result<String, SpeechError> {
///     let transcription = stt.transcribe(audio).await?;
///     Ok(transcription.text)
/// }
/// ```
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// The returned text is not trimmed; callers decide how to treat
    /// whitespace-only results.
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError>;

    /// Get the name of the current STT model
    fn model_name(&self) -> &str;
}

/// Port for Text-to-Speech (TTS) implementations
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech using the configured voice
    ///
    /// Resolves once the provider has accepted the request. The audio body
    /// is streamed afterwards through [`SynthesizedAudio::stream`].
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SpeechError>;

    /// Get the name of the current TTS model
    fn model_name(&self) -> &str;

    /// Get the voice used for synthesis
    fn voice_id(&self) -> &str;
}
