//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the Groq and
//! Cartesia clients, loads configuration and sets up logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, AssistantConfig, LogFormat, ServerConfig};
pub use telemetry::{TelemetryError, init_logging};
