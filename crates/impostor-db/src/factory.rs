//! Composition utilities for wiring core services to `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use impostor_core::{ConfigService, StorageRepository};

use crate::repositories::SqliteStorageRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build the storage repository as a trait object.
    pub fn build_storage(pool: SqlitePool) -> Arc<dyn StorageRepository> {
        Arc::new(SqliteStorageRepository::new(pool))
    }

    /// Build a [`ConfigService`] persisting to `pool`.
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let config = CoreFactory::build_config_service(pool);
    /// config.hydrate(&mut store).await?;
    /// ```
    pub fn build_config_service(pool: SqlitePool) -> ConfigService {
        ConfigService::new(Self::build_storage(pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use impostor_core::{
        Difficulty, GameStore, Locale, StdRandom, WordService, WordServiceError, WordWithHints,
    };

    struct NoWords;

    #[async_trait::async_trait]
    impl WordService for NoWords {
        async fn random_word(
            &self,
            category: &str,
            _locale: &Locale,
            _difficulty: Difficulty,
        ) -> Result<WordWithHints, WordServiceError> {
            Err(WordServiceError::UnknownCategory(category.to_string()))
        }
    }

    #[tokio::test]
    async fn test_config_round_trip_through_sqlite() {
        let pool = setup_test_database().await.unwrap();
        let config = CoreFactory::build_config_service(pool);

        let mut store = GameStore::new(Arc::new(NoWords), Box::new(StdRandom::seeded(0)));
        config.hydrate(&mut store).await.unwrap();
        store.set_difficulty(Difficulty::Hard);
        store.add_custom_category("cars");
        config.persist(&store).await.unwrap();

        let mut restored = GameStore::new(Arc::new(NoWords), Box::new(StdRandom::seeded(0)));
        config.hydrate(&mut restored).await.unwrap();
        assert_eq!(restored.snapshot(), store.snapshot());
    }
}
