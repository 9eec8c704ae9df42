//! Creature repository port - persistence contract for creature tables

use async_trait::async_trait;

use crate::domain::entities::{CreatureKind, CreatureRecord, NewCreature};
use crate::domain::value_objects::{CreatureId, UserId};

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Stored or outgoing JSON could not be (de)serialized or failed validation.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }
}

/// Result of an owner-scoped delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// No creature with that id
    NotFound,
    /// The creature exists but belongs to another user; it was left intact
    NotOwner,
}

/// Repository port for creature tables, one table per [`CreatureKind`].
///
/// Ownership is part of the query contract, not a caller-side filter:
/// reads and deletes are always scoped to an owner.
#[async_trait]
pub trait CreatureRepositoryPort: Send + Sync {
    /// Insert a creature, assigning its id and creation time. Returns the stored row.
    async fn insert(
        &self,
        kind: CreatureKind,
        creature: &NewCreature,
    ) -> Result<CreatureRecord, RepoError>;

    /// All creatures of `owner`, newest first
    async fn list_by_owner(
        &self,
        kind: CreatureKind,
        owner: &UserId,
    ) -> Result<Vec<CreatureRecord>, RepoError>;

    async fn count_by_owner(&self, kind: CreatureKind, owner: &UserId) -> Result<u64, RepoError>;

    /// Delete `id` if and only if it belongs to `owner`
    async fn delete_owned(
        &self,
        kind: CreatureKind,
        id: CreatureId,
        owner: &UserId,
    ) -> Result<DeleteOutcome, RepoError>;
}
