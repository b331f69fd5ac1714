//! Subscriber initialisation

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str =
    "voice_reply_server=info,presentation_http=info,application=info,infrastructure=info,tower_http=info";

/// Errors raised while setting up logging
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber
pub fn init_logging(format: LogFormat) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter());

    let result = match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}
