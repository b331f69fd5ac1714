//! Speech processing provider implementations
//!
//! Contains concrete implementations of the `SpeechToText` and `TextToSpeech` traits.

pub mod cartesia;
pub mod whisper;

pub use cartesia::CartesiaSynthesizer;
pub use whisper::WhisperTranscriber;
