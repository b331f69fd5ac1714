//! Logging setup
//!
//! Console logging through `tracing-subscriber`, in text or JSON form.

mod logging;

pub use logging::{DEFAULT_LOG_FILTER, TelemetryError, init_logging};
