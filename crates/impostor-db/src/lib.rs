//! `SQLite` persistence for the impostor game.
//!
//! Implements the core `StorageRepository` port on top of a single
//! `storage_slots` table.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementations
pub use repositories::SqliteStorageRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(test)]
pub use setup::setup_test_database;
