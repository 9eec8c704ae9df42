//! SQLite connection pool and schema setup

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use super::SqliteCreatureRepository;
use crate::domain::entities::CreatureKind;

/// Shared SQLite pool for all creature tables
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Connect and make sure every creature table exists
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        let database = Self { pool };
        database.initialize_schema().await?;
        Ok(database)
    }

    /// Private in-memory database. Single connection, since each SQLite
    /// connection to `:memory:` opens its own empty database.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let database = Self { pool };
        database.initialize_schema().await?;
        Ok(database)
    }

    /// Create tables and indexes if they are missing. Safe to run on every start.
    pub async fn initialize_schema(&self) -> Result<(), sqlx::Error> {
        for kind in CreatureKind::ALL {
            let table = kind.plural();

            sqlx::query(&format!(
                r#"
                CREATE TABLE IF NOT EXISTS {table} (
                    id TEXT PRIMARY KEY NOT NULL,
                    user_id TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    features TEXT NOT NULL DEFAULT '{{}}',
                    position TEXT NOT NULL DEFAULT '{{"x":0,"y":0,"z":0}}',
                    velocity TEXT NOT NULL DEFAULT '{{"x":0,"y":0,"z":0}}'
                )
                "#
            ))
            .execute(&self.pool)
            .await?;

            sqlx::query(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_user_id ON {table}(user_id)"
            ))
            .execute(&self.pool)
            .await?;

            sqlx::query(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_created_at ON {table}(created_at)"
            ))
            .execute(&self.pool)
            .await?;
        }

        tracing::debug!("Creature schema initialized");
        Ok(())
    }

    pub fn creatures(&self) -> SqliteCreatureRepository {
        SqliteCreatureRepository::new(self.pool.clone())
    }
}
