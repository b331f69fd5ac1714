//! Application layer - Use cases and orchestration
//!
//! Contains the voice reply pipeline and the ports it drives. Provider
//! adapters live in the infrastructure layer.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
