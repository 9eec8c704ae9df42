//! Creature Service - Authorization-checked gateway over one creature table
//!
//! One instance serves one [`CreatureKind`]. Every operation asks the
//! request's [`AuthPort`] for the caller identity first and refuses to act
//! for anyone but that identity, even if the route in front of it is
//! already protected: the user id in a request body is caller-controlled.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::application::ports::outbound::{
    AuthPort, CreatureRepositoryPort, DeleteOutcome, RandomPort, RepoError,
};
use crate::application::services::feature_generator;
use crate::domain::entities::{
    CreatureFeatures, CreatureKind, CreatureRecord, FeatureError, NewCreature,
};
use crate::domain::value_objects::{CreatureId, UserId, Vec3};

/// Spawn positions are drawn from a cube of this edge length around the origin
const SPAWN_POSITION_SPREAD: f64 = 8.0;
/// Initial velocity components are drawn from [-SPREAD/2, SPREAD/2)
const SPAWN_VELOCITY_SPREAD: f64 = 5.0;

/// Errors surfaced by creature operations
#[derive(Debug, thiserror::Error)]
pub enum CreatureError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: CreatureKind, id: CreatureId },

    #[error("Invalid creature: {0}")]
    Validation(String),

    #[error("{0}")]
    StorageFailure(String),
}

impl CreatureError {
    fn storage(action: &str, noun: &str, source: RepoError) -> Self {
        Self::StorageFailure(format!("Failed to {} {}: {}", action, noun, source))
    }
}

impl From<FeatureError> for CreatureError {
    fn from(e: FeatureError) -> Self {
        Self::Validation(e.to_string())
    }
}

/// Request to create a creature.
///
/// Carries the client's fields as received: the owner is only checked
/// against the caller, and the features are only decoded, once the caller
/// is known.
#[derive(Debug, Clone)]
pub struct CreateCreatureRequest {
    pub user_id: String,
    pub features: serde_json::Value,
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Creature gateway trait defining the application use cases
#[async_trait]
pub trait CreatureGateway: Send + Sync {
    /// Create a creature for the caller
    async fn create(
        &self,
        auth: &dyn AuthPort,
        request: CreateCreatureRequest,
    ) -> Result<CreatureRecord, CreatureError>;

    /// List the caller's creatures, newest first
    async fn list_by_user(
        &self,
        auth: &dyn AuthPort,
        user_id: &UserId,
    ) -> Result<Vec<CreatureRecord>, CreatureError>;

    /// Count the caller's creatures
    async fn count_by_user(&self, auth: &dyn AuthPort, user_id: &UserId)
        -> Result<u64, CreatureError>;

    /// Delete one of the caller's creatures
    async fn delete_by_id(&self, auth: &dyn AuthPort, id: CreatureId) -> Result<(), CreatureError>;

    /// Generate features, a spawn position and a velocity, and create the creature
    async fn spawn(
        &self,
        auth: &dyn AuthPort,
        rng: &dyn RandomPort,
    ) -> Result<CreatureRecord, CreatureError>;
}

/// Default implementation of CreatureGateway over a creature repository
#[derive(Clone)]
pub struct CreatureService {
    kind: CreatureKind,
    repository: Arc<dyn CreatureRepositoryPort>,
}

impl CreatureService {
    pub fn new(kind: CreatureKind, repository: Arc<dyn CreatureRepositoryPort>) -> Self {
        Self { kind, repository }
    }

    /// Random features for this service's kind, without persisting anything
    pub fn random_features(&self, rng: &dyn RandomPort) -> CreatureFeatures {
        feature_generator::generate(self.kind, rng)
    }

    async fn require_identity(&self, auth: &dyn AuthPort) -> Result<UserId, CreatureError> {
        auth.current_user_id().await.ok_or_else(|| {
            warn!(kind = %self.kind, "Rejected anonymous caller");
            CreatureError::Unauthorized("User must be authenticated".to_string())
        })
    }

    /// Identity must exist and match `user_id`
    async fn require_user(
        &self,
        auth: &dyn AuthPort,
        user_id: &str,
        action: &str,
    ) -> Result<UserId, CreatureError> {
        let caller = self.require_identity(auth).await?;
        if caller.as_str() != user_id {
            warn!(
                kind = %self.kind,
                caller = %caller,
                requested_for = %user_id,
                "Rejected cross-user {}",
                action
            );
            return Err(CreatureError::Unauthorized(format!(
                "Cannot {} {} for another user",
                action,
                self.kind.plural()
            )));
        }
        Ok(caller)
    }

    /// Decode client features as this service's kind and check every pool
    fn decode_features(&self, value: serde_json::Value) -> Result<CreatureFeatures, CreatureError> {
        let features = CreatureFeatures::parse(self.kind, value)?;
        features.validate()?;
        Ok(features)
    }

    fn check_vectors(request: &CreateCreatureRequest) -> Result<(), CreatureError> {
        if !request.position.is_finite() {
            return Err(CreatureError::Validation(
                "position must have finite coordinates".to_string(),
            ));
        }
        if !request.velocity.is_finite() {
            return Err(CreatureError::Validation(
                "velocity must have finite components".to_string(),
            ));
        }
        Ok(())
    }

    async fn store(&self, new_creature: NewCreature) -> Result<CreatureRecord, CreatureError> {
        let record = self
            .repository
            .insert(self.kind, &new_creature)
            .await
            .map_err(|e| CreatureError::storage("create", self.kind.name(), e))?;

        info!(creature_id = %record.id, "Created {}", self.kind);
        Ok(record)
    }
}

fn centered(rng: &dyn RandomPort, spread: f64) -> f64 {
    (rng.random_f64() - 0.5) * spread
}

fn random_vec3(rng: &dyn RandomPort, spread: f64) -> Vec3 {
    Vec3::new(
        centered(rng, spread),
        centered(rng, spread),
        centered(rng, spread),
    )
}

#[async_trait]
impl CreatureGateway for CreatureService {
    #[instrument(skip(self, auth, request), fields(kind = %self.kind, user_id = %request.user_id))]
    async fn create(
        &self,
        auth: &dyn AuthPort,
        request: CreateCreatureRequest,
    ) -> Result<CreatureRecord, CreatureError> {
        let owner = self.require_user(auth, &request.user_id, "create").await?;
        Self::check_vectors(&request)?;
        let features = self.decode_features(request.features)?;

        self.store(NewCreature {
            user_id: owner,
            features,
            position: request.position,
            velocity: request.velocity,
        })
        .await
    }

    #[instrument(skip(self, auth), fields(kind = %self.kind))]
    async fn list_by_user(
        &self,
        auth: &dyn AuthPort,
        user_id: &UserId,
    ) -> Result<Vec<CreatureRecord>, CreatureError> {
        self.require_user(auth, user_id.as_str(), "fetch").await?;

        let records = self
            .repository
            .list_by_owner(self.kind, user_id)
            .await
            .map_err(|e| CreatureError::storage("fetch", self.kind.plural(), e))?;

        debug!(count = records.len(), "Fetched {}", self.kind.plural());
        Ok(records)
    }

    #[instrument(skip(self, auth), fields(kind = %self.kind))]
    async fn count_by_user(
        &self,
        auth: &dyn AuthPort,
        user_id: &UserId,
    ) -> Result<u64, CreatureError> {
        self.require_user(auth, user_id.as_str(), "count").await?;

        self.repository
            .count_by_owner(self.kind, user_id)
            .await
            .map_err(|e| CreatureError::storage("count", self.kind.plural(), e))
    }

    #[instrument(skip(self, auth), fields(kind = %self.kind))]
    async fn delete_by_id(&self, auth: &dyn AuthPort, id: CreatureId) -> Result<(), CreatureError> {
        let caller = self.require_identity(auth).await?;

        let outcome = self
            .repository
            .delete_owned(self.kind, id, &caller)
            .await
            .map_err(|e| CreatureError::storage("delete", self.kind.name(), e))?;

        match outcome {
            DeleteOutcome::Deleted => {
                info!(creature_id = %id, "Deleted {}", self.kind);
                Ok(())
            }
            DeleteOutcome::NotFound => Err(CreatureError::NotFound {
                kind: self.kind,
                id,
            }),
            DeleteOutcome::NotOwner => {
                warn!(creature_id = %id, caller = %caller, "Rejected delete of another user's {}", self.kind);
                Err(CreatureError::Unauthorized(format!(
                    "Cannot delete another user's {}",
                    self.kind
                )))
            }
        }
    }

    #[instrument(skip(self, auth, rng), fields(kind = %self.kind))]
    async fn spawn(
        &self,
        auth: &dyn AuthPort,
        rng: &dyn RandomPort,
    ) -> Result<CreatureRecord, CreatureError> {
        let caller = self.require_identity(auth).await?;

        self.store(NewCreature {
            user_id: caller,
            features: self.random_features(rng),
            position: random_vec3(rng, SPAWN_POSITION_SPREAD),
            velocity: random_vec3(rng, SPAWN_VELOCITY_SPREAD),
        })
        .await
    }
}
