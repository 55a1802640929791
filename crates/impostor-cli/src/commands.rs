//! Main commands enum and subcommands.

use clap::Subcommand;
use impostor_core::Difficulty;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current game setup
    Show {
        /// Print the saved configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the number of players (3-10)
    Players {
        count: usize,
    },

    /// Rename a player
    Name {
        /// Seat number, starting at 1
        seat: usize,
        /// New name
        name: String,
    },

    /// Set the number of impostors
    Impostors {
        count: usize,
    },

    /// Set the word difficulty (easy, medium, hard)
    Difficulty {
        level: Difficulty,
    },

    /// Select, add or remove word categories
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },

    /// Toggle whether impostors see the hints
    Hints,

    /// Forget the saved configuration
    Reset,

    /// Play a round on this terminal
    Play,

    /// Show resolved data paths
    Paths,
}

/// Category command variants.
#[derive(Subcommand)]
pub enum CategoryCommand {
    /// List built-in and custom categories
    List,
    /// Select or deselect a category
    Toggle { id: String },
    /// Add and select a custom category
    Add { name: String },
    /// Remove a custom category
    Remove { name: String },
}
