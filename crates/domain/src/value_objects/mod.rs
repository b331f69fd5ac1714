//! Value Objects - Immutable, identity-less domain primitives

mod caller_context;
mod caller_location;
mod timezone;

pub use caller_context::CallerContext;
pub use caller_location::{CallerLocation, UNKNOWN_LOCATION};
pub use timezone::Timezone;
