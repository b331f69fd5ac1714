//! Groq chat completion engine
//!
//! Talks to Groq's OpenAI-compatible API.

mod client;

pub use client::GroqInferenceEngine;
