//! Persisted setup configuration and its versioned schema.
//!
//! Only the setup subset of the store survives a session: player names,
//! custom categories, table size, impostor count, difficulty, selected
//! categories and hint visibility. The payload keeps the camelCase layout
//! (`{customCategories, playerNames, gameState: {..}}`) so slots written by
//! earlier builds stay readable.
//!
//! Schema changes are handled by [`MIGRATIONS`], a table keyed by the version
//! a payload is migrated *from*. Each step rewrites the raw JSON up by one
//! version until [`STORAGE_VERSION`] is reached.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::{BUILTIN_CATEGORIES, Difficulty, MIN_PLAYERS};
use crate::ports::StoredSlot;

/// Name of the slot the setup configuration is stored under.
pub const STORAGE_NAME: &str = "party-game-storage";

/// Schema version written by this build.
pub const STORAGE_VERSION: u32 = 1;

/// A single schema upgrade step over the raw payload.
pub type Migration = fn(Value) -> Value;

/// Registered upgrade steps, keyed by source version.
pub const MIGRATIONS: &[(u32, Migration)] = &[(0, migrate_v0_to_v1)];

/// Errors raised while decoding or upgrading a stored slot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    /// The slot was written by a newer build.
    #[error("Stored config has version {found}, this build supports up to {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// No upgrade step exists for this version.
    #[error("No migration registered from version {0}")]
    MissingMigration(u32),

    /// The payload does not match the schema.
    #[error("Malformed config payload: {0}")]
    Malformed(String),
}

/// Setup configuration as it is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedConfig {
    pub custom_categories: Vec<String>,
    pub player_names: Vec<String>,
    pub game_state: PersistedGameConfig,
}

/// The `gameState` part of [`PersistedConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistedGameConfig {
    pub total_players: usize,
    pub impostor_count: usize,
    pub difficulty: Difficulty,
    pub selected_categories: Vec<String>,
    pub show_hints_to_impostors: bool,
}

impl Default for PersistedGameConfig {
    fn default() -> Self {
        Self {
            total_players: MIN_PLAYERS,
            impostor_count: 1,
            difficulty: Difficulty::Medium,
            selected_categories: BUILTIN_CATEGORIES.iter().map(ToString::to_string).collect(),
            show_hints_to_impostors: true,
        }
    }
}

/// v0 payloads predate difficulty levels.
fn migrate_v0_to_v1(mut payload: Value) -> Value {
    if let Value::Object(root) = &mut payload {
        let game_state = root
            .entry("gameState")
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
        if let Value::Object(fields) = game_state {
            fields.insert(
                "difficulty".to_string(),
                Value::String(Difficulty::Medium.as_str().to_string()),
            );
        }
    }
    payload
}

/// Upgrade a raw payload written at `from` to [`STORAGE_VERSION`].
pub fn migrate(mut payload: Value, from: u32) -> Result<Value, PersistenceError> {
    if from > STORAGE_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: from,
            supported: STORAGE_VERSION,
        });
    }

    let mut version = from;
    while version < STORAGE_VERSION {
        let step = MIGRATIONS
            .iter()
            .find(|(source, _)| *source == version)
            .map(|(_, step)| *step)
            .ok_or(PersistenceError::MissingMigration(version))?;
        payload = step(payload);
        version += 1;
    }

    Ok(payload)
}

/// Decode a stored slot, migrating it first when needed.
pub fn decode(slot: StoredSlot) -> Result<PersistedConfig, PersistenceError> {
    let payload = migrate(slot.payload, slot.version)?;
    serde_json::from_value(payload).map_err(|e| PersistenceError::Malformed(e.to_string()))
}

/// Encode a config into a slot at the current version.
pub fn encode(config: &PersistedConfig) -> Result<StoredSlot, PersistenceError> {
    let payload =
        serde_json::to_value(config).map_err(|e| PersistenceError::Malformed(e.to_string()))?;
    Ok(StoredSlot {
        version: STORAGE_VERSION,
        payload,
    })
}
