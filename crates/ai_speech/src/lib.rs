//! AI Speech - Speech-to-Text and Text-to-Speech clients
//!
//! Provides traits and implementations for speech processing:
//! - `SpeechToText` - Transcribe an uploaded clip to text (STT)
//! - `TextToSpeech` - Synthesize a reply into a streamed audio body (TTS)
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the traits (ports)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Supported Providers
//!
//! - Groq-hosted Whisper (STT), OpenAI-compatible `/audio/transcriptions`
//! - Cartesia Sonic (TTS), `/tts/bytes` returning raw PCM
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{AudioData, CartesiaSynthesizer, SpeechToText, TextToSpeech, WhisperTranscriber};
//!
//! let stt = WhisperTranscriber::new(transcription_config)?;
//! let transcription = stt.transcribe(AudioData::new(bytes, "clip.webm", "audio/webm")).await?;
//!
//! let tts = CartesiaSynthesizer::new(synthesis_config)?;
//! let audio = tts.synthesize(&transcription.text).await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::{SynthesisConfig, TranscriptionConfig};
pub use error::SpeechError;
pub use ports::{SpeechToText, TextToSpeech};
pub use providers::{CartesiaSynthesizer, WhisperTranscriber};
pub use types::{AudioData, AudioStream, SynthesizedAudio, Transcription};
