//! Core services - the game's business logic layer.
//!
//! Services here orchestrate between ports (trait interfaces) and domain
//! types. They never know about concrete implementations.

mod config_service;
mod game_store;

pub use config_service::ConfigService;
pub use game_store::{GameStore, StartOutcome};
