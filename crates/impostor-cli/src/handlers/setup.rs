//! Setup command handlers.
//!
//! Each handler applies one store mutator and saves the configuration.

use impostor_core::{BUILTIN_CATEGORIES, Difficulty, GameStore, PersistedConfig};

use crate::bootstrap::CliContext;
use crate::commands::CategoryCommand;
use crate::error::CliError;
use crate::labels::{category_label, english};

/// Print the current setup.
pub fn show(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    if json {
        let snapshot: PersistedConfig = ctx.store.snapshot();
        let text = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| CliError::Core(e.to_string()))?;
        println!("{text}");
    } else {
        print!("{}", render_setup(&ctx.store));
    }
    Ok(())
}

pub async fn players(ctx: &mut CliContext, count: usize) -> Result<(), CliError> {
    ctx.store.set_player_count(count, &english);
    ctx.persist().await?;
    print!("{}", render_setup(&ctx.store));
    Ok(())
}

/// Rename the player at 1-based `seat`.
pub async fn name(ctx: &mut CliContext, seat: usize, name: &str) -> Result<(), CliError> {
    let total = ctx.store.state().total_players;
    if seat == 0 || seat > total {
        return Err(CliError::Arguments(format!(
            "Seat must be between 1 and {total}, got {seat}"
        )));
    }
    ctx.store.set_player_name(seat - 1, name.trim());
    ctx.persist().await?;
    println!("✓ Seat {seat} is now {}", name.trim());
    Ok(())
}

pub async fn impostors(ctx: &mut CliContext, count: usize) -> Result<(), CliError> {
    ctx.store.set_impostor_count(count);
    ctx.persist().await?;
    println!("✓ Impostors: {}", ctx.store.state().impostor_count);
    Ok(())
}

pub async fn difficulty(ctx: &mut CliContext, level: Difficulty) -> Result<(), CliError> {
    ctx.store.set_difficulty(level);
    ctx.persist().await?;
    println!("✓ Difficulty: {level}");
    Ok(())
}

pub async fn hints(ctx: &mut CliContext) -> Result<(), CliError> {
    ctx.store.toggle_hints();
    ctx.persist().await?;
    let state = if ctx.store.state().show_hints_to_impostors {
        "shown"
    } else {
        "hidden"
    };
    println!("✓ Hints are now {state} to impostors");
    Ok(())
}

pub async fn reset(ctx: &CliContext) -> Result<(), CliError> {
    ctx.config.clear().await?;
    println!("✓ Saved configuration cleared.");
    Ok(())
}

/// Execute a category subcommand.
pub async fn category(ctx: &mut CliContext, command: CategoryCommand) -> Result<(), CliError> {
    match command {
        CategoryCommand::List => {
            print!("{}", render_categories(ctx));
            return Ok(());
        }
        CategoryCommand::Toggle { id } => {
            ctx.store.toggle_category(id.trim());
        }
        CategoryCommand::Add { name } => {
            ctx.store.set_custom_category(name);
            let pending = ctx.store.state().custom_category.trim().to_string();
            if pending.is_empty() {
                return Err(CliError::Arguments("Category name cannot be empty".into()));
            }
            ctx.store.add_custom_category(&pending);
            if ctx.words.pool_size(&pending, ctx.store.state().difficulty) == 0 {
                println!(
                    "⚠ The word bank has no {} words for '{pending}'. Add some with --words.",
                    ctx.store.state().difficulty
                );
            }
        }
        CategoryCommand::Remove { name } => {
            ctx.store.remove_custom_category(name.trim());
        }
    }

    ctx.persist().await?;
    print!("{}", render_categories(ctx));
    Ok(())
}

fn render_categories(ctx: &CliContext) -> String {
    let selected = &ctx.store.state().selected_categories;
    let mut out = String::new();
    let mut all: Vec<(&str, bool)> = BUILTIN_CATEGORIES.iter().map(|c| (*c, false)).collect();
    all.extend(
        ctx.store
            .custom_categories()
            .iter()
            .map(|c| (c.as_str(), true)),
    );

    for (id, custom) in all {
        let mark = if selected.iter().any(|s| s == id) { "x" } else { " " };
        let suffix = if custom { " (custom)" } else { "" };
        out.push_str(&format!("[{mark}] {}{suffix}\n", category_label(id)));
    }
    out
}

/// Human-readable summary of the setup configuration.
pub fn render_setup(store: &GameStore) -> String {
    let state = store.state();
    let mut out = String::new();

    out.push_str(&format!(
        "Players: {}   Impostors: {}   Difficulty: {}   Hints for impostors: {}\n",
        state.total_players,
        state.impostor_count,
        state.difficulty,
        if state.show_hints_to_impostors { "on" } else { "off" }
    ));
    for seat in 0..state.total_players {
        let name = store
            .player_names()
            .get(seat)
            .filter(|n| !n.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("{} {}", english("player"), seat + 1));
        out.push_str(&format!("  {}. {name}\n", seat + 1));
    }

    let categories: Vec<String> = state
        .selected_categories
        .iter()
        .map(|c| category_label(c))
        .collect();
    if categories.is_empty() {
        out.push_str("Categories: none selected\n");
    } else {
        out.push_str(&format!("Categories: {}\n", categories.join(", ")));
    }
    out
}
