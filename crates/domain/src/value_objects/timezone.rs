//! Timezone value object

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::DomainError;

/// Clock format used when telling the model the caller's local time,
/// e.g. `10/16/2026, 3:04:05 PM`
const LOCAL_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// A validated IANA timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(Tz);

impl Timezone {
    /// Parse an IANA timezone name such as `Europe/Berlin`
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// Get the IANA name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Format an instant as wall-clock time in this timezone
    #[must_use]
    pub fn format_local(&self, now: DateTime<Utc>) -> String {
        format_clock(&now.with_timezone(&self.0))
    }

    /// Format an instant as wall-clock time in the server's own timezone
    #[must_use]
    pub fn format_server_local(now: DateTime<Utc>) -> String {
        format_clock(&now.with_timezone(&chrono::Local))
    }
}

fn format_clock<Z: TimeZone>(at: &DateTime<Z>) -> String
where
    Z::Offset: fmt::Display,
{
    at.format(LOCAL_TIME_FORMAT).to_string()
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.name())
    }
}
