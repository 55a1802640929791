//! Game domain types.
//!
//! These types describe a single round of the party game: who plays, which
//! phase the round is in, and which word was drawn. They carry no behaviour
//! beyond parsing and defaults; the store in `services` owns the transitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fewest players a round can be configured with.
pub const MIN_PLAYERS: usize = 3;

/// Most players a round can be configured with.
pub const MAX_PLAYERS: usize = 10;

/// Categories that ship with the game, selected by default.
pub const BUILTIN_CATEGORIES: [&str; 6] = [
    "animals", "food", "objects", "places", "movies", "people",
];

/// Discrete stage of a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Setup,
    WordReveal,
    Discussion,
    Results,
}

impl Phase {
    /// Convert phase to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::WordReveal => "wordreveal",
            Self::Discussion => "discussion",
            Self::Results => "results",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role a player is dealt when a round starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Player,
    Impostor,
}

impl Role {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Impostor => "impostor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How obscure the drawn word should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a difficulty from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a difficulty string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Language tag forwarded to the word service (e.g. `en`, `es`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a language tag. Tags are stored lowercase.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_ascii_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// A seat at the table for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// 1-based seat number.
    pub id: usize,
    pub name: String,
    pub role: Role,
}

impl Player {
    #[must_use]
    pub const fn is_impostor(&self) -> bool {
        matches!(self.role, Role::Impostor)
    }
}

/// Full state of the game: setup configuration plus the round in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub phase: Phase,
    pub players: Vec<Player>,
    pub total_players: usize,
    pub impostor_count: usize,
    pub current_word: String,
    pub current_hints: Vec<String>,
    pub current_category: String,
    /// Ordered set of category identifiers a word may be drawn from.
    pub selected_categories: Vec<String>,
    /// Scratch text for the "add custom category" input.
    pub custom_category: String,
    pub difficulty: Difficulty,
    pub show_hints_to_impostors: bool,
    /// Cursor into `players` during the word reveal.
    pub current_reveal_index: usize,
    pub game_started: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: Phase::Setup,
            players: Vec::new(),
            total_players: MIN_PLAYERS,
            impostor_count: 1,
            current_word: String::new(),
            current_hints: Vec::new(),
            current_category: String::new(),
            selected_categories: BUILTIN_CATEGORIES.iter().map(ToString::to_string).collect(),
            custom_category: String::new(),
            difficulty: Difficulty::Medium,
            show_hints_to_impostors: true,
            current_reveal_index: 0,
            game_started: false,
        }
    }
}

/// Largest impostor count allowed for a table of `total_players`.
#[must_use]
pub const fn max_impostors(total_players: usize) -> usize {
    total_players.saturating_sub(1)
}

/// What a player sees when it is their turn to look at the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealCard {
    /// Regular players learn the secret word and its category.
    Word { word: String, category: String },
    /// Impostors only get the hints, and only when hints are enabled.
    Impostor { hints: Option<Vec<String>> },
}
