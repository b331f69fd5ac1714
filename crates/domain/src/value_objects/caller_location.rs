//! Approximate caller location as reported by the edge network

use std::fmt;

/// Text used in the system prompt when the location is not known
pub const UNKNOWN_LOCATION: &str = "unknown";

/// City, region and country of the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerLocation {
    city: String,
    region: String,
    country: String,
}

impl CallerLocation {
    /// Build a location from its parts
    ///
    /// Returns `None` when any part is missing or empty; a partial location
    /// is treated the same as no location at all. Parts are kept as sent.
    #[must_use]
    pub fn from_parts(city: Option<&str>, region: Option<&str>, country: Option<&str>) -> Option<Self> {
        let present = |part: Option<_>| part.filter(|p: &&str| !p.is_empty());

        Some(Self {
            city: present(city)?.to_string(),
            region: present(region)?.to_string(),
            country: present(country)?.to_string(),
        })
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.city, self.region, self.country)
    }
}
