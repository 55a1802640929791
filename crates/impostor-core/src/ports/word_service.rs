//! Word service port.
//!
//! The word service is the only suspension point of a round: the store asks
//! it for a secret word (plus hints) and waits before committing the round.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Difficulty, Locale};

/// A secret word together with its ordered hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordWithHints {
    pub word: String,
    pub hints: Vec<String>,
}

/// Errors reported by word service implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WordServiceError {
    /// The service knows nothing about this category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The category exists but has no words for the requested difficulty.
    #[error("No {difficulty} words available for category '{category}'")]
    NoWords {
        category: String,
        difficulty: Difficulty,
    },

    /// The backing source could not be reached or read.
    #[error("Word service unavailable: {0}")]
    Unavailable(String),
}

/// Source of secret words for a round.
///
/// # Design Rules
///
/// - Failures are returned, never swallowed; the store propagates them
/// - No retries or caching at this level
#[async_trait]
pub trait WordService: Send + Sync {
    /// Draw a word for `category` in `locale` at `difficulty`.
    async fn random_word(
        &self,
        category: &str,
        locale: &Locale,
        difficulty: Difficulty,
    ) -> Result<WordWithHints, WordServiceError>;
}
