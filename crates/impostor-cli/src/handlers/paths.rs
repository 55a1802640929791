//! Paths command handler.
//!
//! Displays resolved paths for diagnostics.

use impostor_core::paths::data_root;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the data directory and database file in `key = value` format.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let root = data_root().map_err(|e| CliError::Config(e.to_string()))?;
    println!("data_root = {}", root.display());
    println!("database = {}", ctx.db_path.display());
    println!("locale = {}", ctx.locale);
    println!("word_categories = {}", ctx.words.categories().join(", "));
    Ok(())
}
