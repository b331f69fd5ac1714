//! Correlation ID middleware for latency log lines
//!
//! Reads the edge request id so every stage timer and log line of one
//! request can be tied together. Requests that did not pass through the
//! edge network are tagged `local`.

use std::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    body::Body,
    extract::Request,
    http::HeaderMap,
    response::Response,
};
use tower::{Layer, Service};
use tracing::Instrument;

/// The header carrying the edge request id
pub const CORRELATION_ID_HEADER: &str = "x-vercel-id";

/// Tag used when the request carries no edge id
pub const LOCAL_CORRELATION_ID: &str = "local";

/// Layer that tags every request with a correlation id
#[derive(Debug, Clone, Default)]
pub struct CorrelationIdLayer;

impl CorrelationIdLayer {
    /// Create a new correlation id layer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for CorrelationIdLayer {
    type Service = CorrelationIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorrelationIdService { inner }
    }
}

/// Service that resolves the correlation id for each request
#[derive(Debug, Clone)]
pub struct CorrelationIdService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for CorrelationIdService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let correlation_id = CorrelationId::from_headers(request.headers());

        let span = tracing::info_span!(
            "http_request",
            correlation_id = %correlation_id,
            method = %request.method(),
            uri = %request.uri().path(),
        );

        request.extensions_mut().insert(correlation_id);

        // Take the service that was driven to readiness, leave a fresh clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move { inner.call(request).await }.instrument(span))
    }
}

/// Correlation id of the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    /// Resolve the id from request headers, falling back to `local`
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let id = headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(LOCAL_CORRELATION_ID);
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self(LOCAL_CORRELATION_ID.to_string())
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
