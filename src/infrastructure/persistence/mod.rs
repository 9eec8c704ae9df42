//! SQLite persistence adapters
//!
//! One table per creature kind, sharing a single connection pool.

mod connection;
mod creature_repository;

pub use connection::SqliteDatabase;
pub use creature_repository::SqliteCreatureRepository;
