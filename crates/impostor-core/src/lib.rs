//! Core game model, ports and services for the impostor party game.
//!
//! Players configure a table (size, names, categories, difficulty), start a
//! round, and the store deals roles and draws a secret word. Everything that
//! touches the outside world (word sources, storage, randomness, labels) is
//! reached through the traits in [`ports`].

pub mod domain;
pub mod paths;
pub mod persistence;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    BUILTIN_CATEGORIES, Difficulty, GameState, Locale, MAX_PLAYERS, MIN_PLAYERS, Phase, Player,
    RevealCard, Role,
};
pub use persistence::{
    PersistedConfig, PersistedGameConfig, PersistenceError, STORAGE_NAME, STORAGE_VERSION,
};
pub use ports::{
    CoreError, RandomSource, RepositoryError, StdRandom, StorageRepository, StoredSlot,
    Translator, WordService, WordServiceError, WordWithHints,
};
pub use services::{ConfigService, GameStore, StartOutcome};
