//! Config service - loads and saves the persisted setup configuration.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::GameStore;
use crate::persistence::{self, PersistedConfig, STORAGE_NAME, STORAGE_VERSION};
use crate::ports::{CoreError, StorageRepository};

/// Service for the persisted setup configuration.
pub struct ConfigService {
    repo: Arc<dyn StorageRepository>,
}

impl ConfigService {
    /// Create a new config service.
    pub fn new(repo: Arc<dyn StorageRepository>) -> Self {
        Self { repo }
    }

    /// Load the stored configuration, migrating older slots.
    ///
    /// A migrated slot is written back at the current version. A failed
    /// write-back is logged and the migrated config is still returned.
    pub async fn load(&self) -> Result<Option<PersistedConfig>, CoreError> {
        let Some(slot) = self.repo.load(STORAGE_NAME).await? else {
            debug!("No saved config");
            return Ok(None);
        };

        let stored_version = slot.version;
        let config = persistence::decode(slot)?;

        if stored_version != STORAGE_VERSION {
            info!(
                from = stored_version,
                to = STORAGE_VERSION,
                "Migrated saved config"
            );
            if let Err(err) = self.save(&config).await {
                warn!(error = %err, "Could not write back migrated config");
            }
        }

        Ok(Some(config))
    }

    /// Save a configuration at the current schema version.
    pub async fn save(&self, config: &PersistedConfig) -> Result<(), CoreError> {
        let slot = persistence::encode(config)?;
        self.repo.save(STORAGE_NAME, &slot).await?;
        Ok(())
    }

    /// Delete the stored configuration.
    pub async fn clear(&self) -> Result<(), CoreError> {
        self.repo.remove(STORAGE_NAME).await?;
        Ok(())
    }

    /// Load the stored configuration into `store` and mark it hydrated.
    pub async fn hydrate(&self, store: &mut GameStore) -> Result<(), CoreError> {
        let config = self.load().await?;
        store.hydrate(config);
        Ok(())
    }

    /// Persist the configuration subset of `store`.
    pub async fn persist(&self, store: &GameStore) -> Result<(), CoreError> {
        self.save(&store.snapshot()).await
    }
}
