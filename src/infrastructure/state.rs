//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::outbound::{CreatureRepositoryPort, RandomPort};
use crate::application::services::CreatureService;
use crate::domain::entities::CreatureKind;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::SqliteDatabase;
use crate::infrastructure::random::{SeededRandom, ThreadRngAdapter};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    /// Random source for feature generation and spawning
    pub random: Arc<dyn RandomPort>,
    // Application services, one per creature table
    pub unicorn_service: CreatureService,
    pub llama_service: CreatureService,
    pub cat_service: CreatureService,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let database = SqliteDatabase::connect(&config.database_url, config.database_max_connections)
            .await
            .context("Failed to open creature database")?;

        let random: Arc<dyn RandomPort> = match config.random_seed {
            Some(seed) => {
                tracing::warn!(seed, "Using seeded random source");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(ThreadRngAdapter::new()),
        };

        Ok(Self::with_repository(
            config,
            Arc::new(database.creatures()),
            random,
        ))
    }

    pub fn with_repository(
        config: AppConfig,
        repository: Arc<dyn CreatureRepositoryPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            config,
            random,
            unicorn_service: CreatureService::new(CreatureKind::Unicorn, repository.clone()),
            llama_service: CreatureService::new(CreatureKind::Llama, repository.clone()),
            cat_service: CreatureService::new(CreatureKind::Cat, repository),
        }
    }

    pub fn creatures(&self, kind: CreatureKind) -> &CreatureService {
        match kind {
            CreatureKind::Unicorn => &self.unicorn_service,
            CreatureKind::Llama => &self.llama_service,
            CreatureKind::Cat => &self.cat_service,
        }
    }
}
