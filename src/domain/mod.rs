//! Domain layer - Core business logic with no I/O
//!
//! This layer contains:
//! - Entities: Creature records and the per-kind feature bundles with their pools
//! - Value Objects: Identifiers and scene vectors

pub mod entities;
pub mod value_objects;
