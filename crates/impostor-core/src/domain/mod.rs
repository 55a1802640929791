//! Core domain types.
//!
//! These types represent the pure game model, independent of any
//! infrastructure concerns (storage, word sources, terminals).

mod game;

pub use game::{
    BUILTIN_CATEGORIES, Difficulty, GameState, Locale, MAX_PLAYERS, MIN_PLAYERS,
    ParseDifficultyError, Phase, Player, RevealCard, Role, max_impostors,
};
