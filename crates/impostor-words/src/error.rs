//! Word bank loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a word bank.
#[derive(Debug, Error)]
pub enum WordBankError {
    /// The bank file could not be read.
    #[error("Failed to read word bank {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// The document is not valid bank JSON.
    #[error("Invalid word bank: {0}")]
    Parse(String),

    /// A pool is keyed by something other than easy/medium/hard.
    #[error("Category '{category}' has unknown difficulty '{level}'")]
    UnknownDifficulty { category: String, level: String },
}
