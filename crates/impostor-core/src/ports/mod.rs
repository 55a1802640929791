//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the game store expects from its
//! collaborators. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem or network implementation details
//! - Randomness is a port too, so rounds can be replayed in tests

pub mod random;
pub mod storage;
pub mod translator;
pub mod word_service;

use thiserror::Error;

pub use random::{RandomSource, StdRandom, choose, shuffle};
pub use storage::{StorageRepository, StoredSlot};
pub use translator::{
    PLAYER_LABEL_KEY, SOMETHING_WENT_WRONG_KEY, Translator, default_player_name,
};
pub use word_service::{WordService, WordServiceError, WordWithHints};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters should map this to their own error types (CLI exit codes,
/// user-facing notifications).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The word service failed to produce a word.
    #[error(transparent)]
    WordService(#[from] WordServiceError),

    /// A persisted slot could not be decoded or migrated.
    #[error(transparent)]
    Persistence(#[from] crate::persistence::PersistenceError),
}
