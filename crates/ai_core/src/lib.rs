//! AI Core - Chat completion engine
//!
//! Provides the inference port and a Groq-backed implementation speaking the
//! OpenAI-compatible `/chat/completions` API.

pub mod config;
pub mod error;
pub mod groq;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use groq::GroqInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse};
