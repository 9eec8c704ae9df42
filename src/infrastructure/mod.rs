//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: SQLite adapter for creature storage
//! - HTTP: REST API routes
//! - Auth: Caller identity from the auth proxy header
//! - Random: Random sources for feature generation
//! - Config: Application configuration
//! - State: Shared application state

pub mod auth;
pub mod config;
pub mod http;
pub mod persistence;
pub mod random;
pub mod state;
