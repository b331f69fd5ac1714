//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Role outside of the accepted conversation roles
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Timezone name not present in the IANA database
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
