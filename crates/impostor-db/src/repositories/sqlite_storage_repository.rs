//! `SQLite` implementation of the `StorageRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use impostor_core::{RepositoryError, StorageRepository, StoredSlot};

/// `SQLite` implementation of the `StorageRepository` trait.
///
/// Each slot is one row: the schema version in its own column and the
/// payload as a JSON blob.
pub struct SqliteStorageRepository {
    pool: SqlitePool,
}

impl SqliteStorageRepository {
    /// Create a new `SQLite` storage repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageRepository for SqliteStorageRepository {
    async fn load(&self, name: &str) -> Result<Option<StoredSlot>, RepositoryError> {
        let row = sqlx::query("SELECT version, value FROM storage_slots WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let Some(r) = row else {
            return Ok(None);
        };

        let version: i64 = r.get("version");
        let json: String = r.get("value");
        let version = u32::try_from(version).map_err(|_| {
            RepositoryError::Serialization(format!("Invalid slot version {version}"))
        })?;
        let payload = serde_json::from_str(&json)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        Ok(Some(StoredSlot { version, payload }))
    }

    async fn save(&self, name: &str, slot: &StoredSlot) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(&slot.payload)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query(
            "INSERT OR REPLACE INTO storage_slots (name, version, value, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(i64::from(slot.version))
        .bind(&json)
        .bind(&updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM storage_slots WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }
}
