//! Text-carrying response headers
//!
//! Transcript and reply travel back as header values, which only admit
//! visible ASCII. Both are percent-encoded with the same unreserved set as
//! JavaScript's `encodeURIComponent`, so a browser client can recover them
//! with `decodeURIComponent`.

use std::{borrow::Cow, str::Utf8Error};

use axum::http::header::{HeaderName, HeaderValue, InvalidHeaderValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Header carrying the user's turn
pub const TRANSCRIPT_HEADER: HeaderName = HeaderName::from_static("x-transcript");

/// Header carrying the assistant's reply
pub const RESPONSE_HEADER: HeaderName = HeaderName::from_static("x-response");

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `text` the way `encodeURIComponent` does
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Encode `text` into a header value
pub fn encoded_header_value(text: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&encode_component(text))
}

/// Reverse of [`encode_component`]
pub fn decode_component(encoded: &str) -> Result<Cow<'_, str>, Utf8Error> {
    percent_decode_str(encoded).decode_utf8()
}
