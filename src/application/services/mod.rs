//! Application services - Use case implementations
//!
//! Services depend on outbound ports only; the infrastructure layer wires in
//! the SQLite repository, the request-scoped identity and the random source.

pub mod creature_service;
pub mod feature_generator;

pub use creature_service::{
    CreateCreatureRequest, CreatureError, CreatureGateway, CreatureService,
};
