//! Configuration for speech processing

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the Whisper transcription client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionConfig {
    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_groq_base_url")]
    pub base_url: String,

    /// Speech-to-text model
    #[serde(default = "default_stt_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_stt_timeout_ms")]
    pub timeout_ms: u64,

    /// Bearer token for the provider
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

/// Configuration for the Cartesia synthesis client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Base URL of the Cartesia API
    #[serde(default = "default_cartesia_base_url")]
    pub base_url: String,

    /// Value sent as the `Cartesia-Version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Text-to-speech model
    #[serde(default = "default_tts_model")]
    pub model_id: String,

    /// Voice used for every reply
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// Speaking speed control (-1.0 slowest to 1.0 fastest)
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Output sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Output sample encoding
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Output container
    #[serde(default = "default_container")]
    pub container: String,

    /// Connect timeout in milliseconds. No overall request timeout is
    /// applied so long audio streams are not cut off.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// `X-API-Key` credential
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

fn default_groq_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_stt_model() -> String {
    "whisper-large-v3".to_string()
}

const fn default_stt_timeout_ms() -> u64 {
    30000 // 30 seconds
}

fn default_cartesia_base_url() -> String {
    "https://api.cartesia.ai".to_string()
}

fn default_api_version() -> String {
    "2024-06-30".to_string()
}

fn default_tts_model() -> String {
    "sonic-turbo".to_string()
}

fn default_voice_id() -> String {
    "df1516ff-6800-447a-9aba-b84ce5545f60".to_string()
}

const fn default_speed() -> f32 {
    0.3
}

const fn default_sample_rate() -> u32 {
    24000
}

fn default_encoding() -> String {
    "pcm_f32le".to_string()
}

fn default_container() -> String {
    "raw".to_string()
}

const fn default_connect_timeout_ms() -> u64 {
    10000
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            base_url: default_groq_base_url(),
            model: default_stt_model(),
            timeout_ms: default_stt_timeout_ms(),
            api_key: None,
        }
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            base_url: default_cartesia_base_url(),
            api_version: default_api_version(),
            model_id: default_tts_model(),
            voice_id: default_voice_id(),
            speed: default_speed(),
            sample_rate: default_sample_rate(),
            encoding: default_encoding(),
            container: default_container(),
            connect_timeout_ms: default_connect_timeout_ms(),
            api_key: None,
        }
    }
}

impl TranscriptionConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some(SecretString::from("test-key")),
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_none() {
            return Err("Transcription API key is required (GROQ_API_KEY)".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("Transcription timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl SynthesisConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some(SecretString::from("test-key")),
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_none() {
            return Err("Synthesis API key is required (CARTESIA_API_KEY)".to_string());
        }

        if !(-1.0..=1.0).contains(&self.speed) {
            return Err(format!(
                "Speed must be between -1.0 and 1.0, got {}",
                self.speed
            ));
        }

        if self.sample_rate == 0 {
            return Err("Sample rate must be greater than 0".to_string());
        }

        if self.connect_timeout_ms == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Content type of the synthesized body
    pub fn content_type(&self) -> &'static str {
        match self.container.as_str() {
            "wav" => "audio/wav",
            "mp3" => "audio/mpeg",
            _ => "application/octet-stream",
        }
    }
}
