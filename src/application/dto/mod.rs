//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP layer can
//! serialize/deserialize without knowing how records are stored.

pub mod creature;

pub use creature::*;
