//! HTTP request handlers

pub mod caller;
pub mod health;
pub mod payload;
pub mod voice;
