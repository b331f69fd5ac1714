//! Caller context from edge geolocation headers

use axum::http::HeaderMap;
use domain::{CallerContext, CallerLocation, Timezone};
use tracing::debug;

use crate::headers::decode_component;

pub const CITY_HEADER: &str = "x-vercel-ip-city";
pub const REGION_HEADER: &str = "x-vercel-ip-country-region";
pub const COUNTRY_HEADER: &str = "x-vercel-ip-country";
pub const TIMEZONE_HEADER: &str = "x-vercel-ip-timezone";

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Build the caller context
///
/// The city arrives percent-encoded; one that does not decode to UTF-8 is
/// treated as missing. An unknown timezone name is dropped so the prompt
/// falls back to server time.
pub fn caller_context(headers: &HeaderMap) -> CallerContext {
    let city = header(headers, CITY_HEADER).and_then(|raw| decode_component(raw).ok());

    let location = CallerLocation::from_parts(
        city.as_deref(),
        header(headers, REGION_HEADER),
        header(headers, COUNTRY_HEADER),
    );

    let timezone = header(headers, TIMEZONE_HEADER).and_then(|raw| {
        Timezone::parse(raw)
            .inspect_err(|e| debug!(error = %e, "Ignoring caller timezone"))
            .ok()
    });

    CallerContext::new(location, timezone)
}
