//! Voice reply handler

use application::VoiceReplyRequest;
use axum::{
    body::Body,
    extract::{Extension, Multipart, State, multipart::MultipartRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::Response,
};
use tracing::{debug, error, instrument};

use super::{caller::caller_context, payload::parse_payload};
use crate::{
    error::ApiError,
    headers::{RESPONSE_HEADER, TRANSCRIPT_HEADER, encoded_header_value},
    middleware::CorrelationId,
    state::AppState,
};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Answer one conversational turn with streamed speech
///
/// The body is the synthesized audio exactly as the provider sends it. The
/// user's turn and the reply text travel in `X-Transcript` and `X-Response`.
#[instrument(skip_all)]
pub async fn voice_reply(
    State(state): State<AppState>,
    correlation_id: Option<Extension<CorrelationId>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let correlation_id = correlation_id.map(|Extension(id)| id).unwrap_or_default();

    let multipart = multipart.map_err(|e| {
        debug!(error = %e, "Request body is not multipart form data");
        ApiError::InvalidRequest
    })?;
    let payload = parse_payload(multipart).await?;

    let request = VoiceReplyRequest {
        input: payload.input,
        history: payload.history,
        caller: caller_context(&headers),
        correlation_id: correlation_id.0,
    };

    let reply = state.voice_reply.reply(request).await?;

    let content_type = HeaderValue::from_str(&reply.audio.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(FALLBACK_CONTENT_TYPE));
    let transcript = encoded_header_value(&reply.transcript).map_err(|e| {
        error!(error = %e, "Transcript header could not be built");
        ApiError::Internal
    })?;
    let response_text = encoded_header_value(&reply.reply).map_err(|e| {
        error!(error = %e, "Reply header could not be built");
        ApiError::Internal
    })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(TRANSCRIPT_HEADER, transcript)
        .header(RESPONSE_HEADER, response_text)
        .body(Body::from_stream(reply.audio.body))
        .map_err(|e| {
            error!(error = %e, "Response could not be built");
            ApiError::Internal
        })
}
