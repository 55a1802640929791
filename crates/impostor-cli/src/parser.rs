//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use impostor_core::Locale;

use crate::commands::Commands;

/// Command-line interface for the impostor party game.
///
/// Setup commands change the saved configuration; `play` runs a round on
/// this terminal, passing it from player to player.
#[derive(Parser)]
#[command(name = "impostor")]
#[command(about = "Pass-and-play party game: find the impostor who doesn't know the word")]
#[command(version)]
pub struct Cli {
    /// Database file holding the saved configuration
    #[arg(long = "db", env = "IMPOSTOR_DB", global = true)]
    pub db: Option<String>,

    /// Language the word service is asked for
    #[arg(long, env = "IMPOSTOR_LOCALE", default_value = "en", global = true)]
    pub locale: Locale,

    /// Extra word bank (JSON) merged over the bundled one
    #[arg(long = "words", env = "IMPOSTOR_WORDS", global = true)]
    pub words: Option<PathBuf>,

    /// Seed for role and word selection (reproducible rounds)
    #[arg(long, env = "IMPOSTOR_SEED", global = true)]
    pub seed: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
