//! Command handlers that delegate to the game store.
//!
//! Handlers are thin wrappers that:
//! 1. Validate CLI-specific input
//! 2. Call `GameStore` / `ConfigService` methods
//! 3. Format output for the terminal
//!
//! Handlers should NOT contain game rules or touch the database directly.

pub mod paths;
pub mod play;
pub mod setup;
