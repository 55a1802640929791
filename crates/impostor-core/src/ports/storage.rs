//! Storage repository trait definition.
//!
//! This port persists named, versioned JSON slots. It knows nothing about
//! what a slot contains; schema versions and migrations live in
//! [`crate::persistence`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::RepositoryError;

/// One persisted value together with the schema version it was written at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSlot {
    pub version: u32,
    pub payload: serde_json::Value,
}

/// Key-value store for versioned slots.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Payloads are opaque JSON; the implementation only stores them
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Load a slot by name. Returns `None` if nothing was stored.
    async fn load(&self, name: &str) -> Result<Option<StoredSlot>, RepositoryError>;

    /// Insert or replace a slot.
    async fn save(&self, name: &str, slot: &StoredSlot) -> Result<(), RepositoryError>;

    /// Delete a slot. Removing a missing slot is not an error.
    async fn remove(&self, name: &str) -> Result<(), RepositoryError>;
}
