//! Domain layer for the voice reply service
//!
//! Contains the conversation vocabulary (turns, roles, prompt messages) and
//! the caller context derived from edge headers. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
