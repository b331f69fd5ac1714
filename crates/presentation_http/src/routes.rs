//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::{handlers, middleware::CorrelationIdLayer, state::AppState};

/// Create the main router with all routes
///
/// `/api` drops axum's built-in body cap in favour of the configured limit:
/// a declared oversize body is answered with `413`, one that overruns while
/// streaming fails form parsing.
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.max_body_bytes;

    let api = Router::new()
        .route("/api", post(handlers::voice::voice_reply))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api)
        .layer(CorrelationIdLayer::new())
        .with_state(state)
}
