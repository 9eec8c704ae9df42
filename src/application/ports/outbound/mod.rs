//! Outbound ports - Interfaces that the application requires from external systems

mod auth_port;
mod creature_repository_port;
mod random_port;

pub use auth_port::AuthPort;
pub use creature_repository_port::{CreatureRepositoryPort, DeleteOutcome, RepoError};
pub use random_port::RandomPort;
