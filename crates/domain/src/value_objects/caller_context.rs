//! Facts about the caller that feed the system prompt

use chrono::{DateTime, Utc};

use super::{
    caller_location::{CallerLocation, UNKNOWN_LOCATION},
    timezone::Timezone,
};

/// Where the caller is and which clock they live by
///
/// Derived per request from edge headers; both parts are optional and fall
/// back independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerContext {
    /// Approximate location, if the edge reported all of it
    pub location: Option<CallerLocation>,
    /// Caller timezone, if reported and valid
    pub timezone: Option<Timezone>,
}

impl CallerContext {
    /// Create a context from already-parsed parts
    #[must_use]
    pub const fn new(location: Option<CallerLocation>, timezone: Option<Timezone>) -> Self {
        Self { location, timezone }
    }

    /// Location text for the prompt, `unknown` when absent
    #[must_use]
    pub fn location_label(&self) -> String {
        self.location
            .as_ref()
            .map_or_else(|| UNKNOWN_LOCATION.to_string(), ToString::to_string)
    }

    /// Caller wall-clock time, using the server timezone when the caller's is unknown
    #[must_use]
    pub fn local_time(&self, now: DateTime<Utc>) -> String {
        self.timezone.map_or_else(
            || Timezone::format_server_local(now),
            |tz| tz.format_local(now),
        )
    }
}
