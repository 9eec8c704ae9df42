//! SQLite creature repository - one table per creature kind
//!
//! `features`, `position` and `velocity` are stored as JSON text and
//! re-validated on every read. `created_at` is stored as fixed-width RFC 3339
//! (microseconds, `Z`), so text order equals time order.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::application::ports::outbound::{CreatureRepositoryPort, DeleteOutcome, RepoError};
use crate::domain::entities::{CreatureFeatures, CreatureKind, CreatureRecord, NewCreature};
use crate::domain::value_objects::{CreatureId, UserId, Vec3};

const COLUMNS: &str = "id, user_id, created_at, features, position, velocity";

/// SQLite implementation of CreatureRepositoryPort
pub struct SqliteCreatureRepository {
    pool: SqlitePool,
}

impl SqliteCreatureRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(kind: CreatureKind, row: &SqliteRow) -> Result<CreatureRecord, RepoError> {
        let column = |name: &'static str| -> Result<String, RepoError> {
            row.try_get::<String, _>(name)
                .map_err(|e| RepoError::database("decode_row", e))
        };

        let id = Uuid::parse_str(&column("id")?)
            .map_err(|e| RepoError::serialization(format!("Invalid id: {}", e)))?;
        let user_id = UserId::parse(column("user_id")?)
            .map_err(|e| RepoError::serialization(format!("Invalid user_id: {}", e)))?;
        let created_at = DateTime::parse_from_rfc3339(&column("created_at")?)
            .map_err(|e| RepoError::serialization(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);
        let features = CreatureFeatures::from_json_str(kind, &column("features")?)
            .map_err(RepoError::serialization)?;
        let position: Vec3 = serde_json::from_str(&column("position")?)
            .map_err(|e| RepoError::serialization(format!("Invalid position: {}", e)))?;
        let velocity: Vec3 = serde_json::from_str(&column("velocity")?)
            .map_err(|e| RepoError::serialization(format!("Invalid velocity: {}", e)))?;

        Ok(CreatureRecord {
            id: CreatureId::from_uuid(id),
            user_id,
            created_at,
            features,
            position,
            velocity,
        })
    }
}

#[async_trait]
impl CreatureRepositoryPort for SqliteCreatureRepository {
    async fn insert(
        &self,
        kind: CreatureKind,
        creature: &NewCreature,
    ) -> Result<CreatureRecord, RepoError> {
        let features = serde_json::to_string(&creature.features).map_err(RepoError::serialization)?;
        let position = serde_json::to_string(&creature.position).map_err(RepoError::serialization)?;
        let velocity = serde_json::to_string(&creature.velocity).map_err(RepoError::serialization)?;
        let id = CreatureId::new();
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let row = sqlx::query(&format!(
            "INSERT INTO {} ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}",
            kind.plural()
        ))
        .bind(id.to_string())
        .bind(creature.user_id.as_str())
        .bind(&created_at)
        .bind(&features)
        .bind(&position)
        .bind(&velocity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("insert", e))?;

        Self::row_to_record(kind, &row)
    }

    async fn list_by_owner(
        &self,
        kind: CreatureKind,
        owner: &UserId,
    ) -> Result<Vec<CreatureRecord>, RepoError> {
        // rowid breaks ties between inserts within the same microsecond
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM {} WHERE user_id = ? ORDER BY created_at DESC, rowid DESC",
            kind.plural()
        ))
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("list_by_owner", e))?;

        rows.iter()
            .map(|row| Self::row_to_record(kind, row))
            .collect()
    }

    async fn count_by_owner(&self, kind: CreatureKind, owner: &UserId) -> Result<u64, RepoError> {
        let count: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {} WHERE user_id = ?",
            kind.plural()
        ))
        .bind(owner.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("count_by_owner", e))?;

        u64::try_from(count).map_err(|e| RepoError::database("count_by_owner", e))
    }

    async fn delete_owned(
        &self,
        kind: CreatureKind,
        id: CreatureId,
        owner: &UserId,
    ) -> Result<DeleteOutcome, RepoError> {
        let table = kind.plural();
        let id = id.to_string();

        // Delete and existence check share one transaction so a concurrent
        // delete cannot turn "someone else's" into "not found".
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("delete_owned", e))?;

        let deleted = sqlx::query(&format!("DELETE FROM {table} WHERE id = ? AND user_id = ?"))
            .bind(&id)
            .bind(owner.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("delete_owned", e))?
            .rows_affected();

        let outcome = if deleted > 0 {
            DeleteOutcome::Deleted
        } else {
            let existing = sqlx::query(&format!("SELECT user_id FROM {table} WHERE id = ? LIMIT 1"))
                .bind(&id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| RepoError::database("delete_owned", e))?;

            match existing {
                Some(_) => DeleteOutcome::NotOwner,
                None => DeleteOutcome::NotFound,
            }
        };

        tx.commit()
            .await
            .map_err(|e| RepoError::database("delete_owned", e))?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::feature_generator;
    use crate::infrastructure::persistence::SqliteDatabase;
    use crate::infrastructure::random::SeededRandom;

    async fn create_test_database() -> SqliteDatabase {
        SqliteDatabase::in_memory().await.unwrap()
    }

    fn new_cat(owner: &str, rng: &SeededRandom) -> NewCreature {
        NewCreature {
            user_id: UserId::parse(owner).unwrap(),
            features: feature_generator::generate(CreatureKind::Cat, rng),
            position: Vec3::new(0.5, -1.5, 2.0),
            velocity: Vec3::ORIGIN,
        }
    }

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let database = create_test_database().await;
        let repository = database.creatures();
        let rng = SeededRandom::new(21);

        let creature = new_cat("user_alice", &rng);
        let record = repository.insert(CreatureKind::Cat, &creature).await.unwrap();

        assert_eq!(record.user_id, creature.user_id);
        assert_eq!(record.features, creature.features);
        assert_eq!(record.position, creature.position);
        assert_eq!(record.velocity, creature.velocity);
        assert!(record.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_list_orders_newest_first_within_same_timestamp() {
        let database = create_test_database().await;
        let repository = database.creatures();
        let rng = SeededRandom::new(22);

        let mut ids = Vec::new();
        for _ in 0..5 {
            let record = repository
                .insert(CreatureKind::Cat, &new_cat("user_alice", &rng))
                .await
                .unwrap();
            ids.push(record.id);
        }
        ids.reverse();

        let owner = UserId::parse("user_alice").unwrap();
        let listed: Vec<_> = repository
            .list_by_owner(CreatureKind::Cat, &owner)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_delete_owned_outcomes() {
        let database = create_test_database().await;
        let repository = database.creatures();
        let rng = SeededRandom::new(23);
        let alice = UserId::parse("user_alice").unwrap();
        let bob = UserId::parse("user_bob").unwrap();

        let record = repository
            .insert(CreatureKind::Cat, &new_cat("user_alice", &rng))
            .await
            .unwrap();

        assert_eq!(
            repository
                .delete_owned(CreatureKind::Cat, record.id, &bob)
                .await
                .unwrap(),
            DeleteOutcome::NotOwner
        );
        assert_eq!(
            repository.count_by_owner(CreatureKind::Cat, &alice).await.unwrap(),
            1
        );
        assert_eq!(
            repository
                .delete_owned(CreatureKind::Cat, record.id, &alice)
                .await
                .unwrap(),
            DeleteOutcome::Deleted
        );
        assert_eq!(
            repository
                .delete_owned(CreatureKind::Cat, record.id, &alice)
                .await
                .unwrap(),
            DeleteOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_corrupt_features_surface_as_serialization_error() {
        let database = create_test_database().await;
        let repository = database.creatures();

        sqlx::query(
            "INSERT INTO cats (id, user_id, created_at, features) VALUES (?, 'user_alice', ?, ?)",
        )
        .bind(CreatureId::new().to_string())
        .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
        .bind(r#"{"furPattern":"plaid"}"#)
        .execute(&repository.pool)
        .await
        .unwrap();

        let owner = UserId::parse("user_alice").unwrap();
        let result = repository.list_by_owner(CreatureKind::Cat, &owner).await;
        assert!(matches!(result, Err(RepoError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_schema_initialization_is_idempotent() {
        let database = create_test_database().await;
        database.initialize_schema().await.unwrap();
        database.initialize_schema().await.unwrap();
    }
}
