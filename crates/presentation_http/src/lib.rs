//! HTTP presentation layer
//!
//! Provides the `POST /api` voice reply endpoint and a liveness check,
//! backed by the application layer's `VoiceReplyService`.

pub mod error;
pub mod handlers;
pub mod headers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{CORRELATION_ID_HEADER, CorrelationId, CorrelationIdLayer};
pub use state::AppState;
