//! Play command handler.
//!
//! Runs rounds on a single terminal: each player in turn looks at their
//! card while the others look away, then the table discusses and the
//! impostors are revealed.

use impostor_core::ports::SOMETHING_WENT_WRONG_KEY;
use impostor_core::{GameStore, Phase, RevealCard, StartOutcome};
use tracing::error;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::labels::{category_label, english};
use crate::utils::input::{clear_screen, prompt_confirmation, wait_for_enter};

/// Execute the play command.
pub async fn execute(ctx: &mut CliContext) -> Result<(), CliError> {
    loop {
        match ctx.store.start_game(&english, &ctx.locale).await {
            Ok(StartOutcome::Started { .. } | StartOutcome::AlreadyStarted) => {}
            Ok(StartOutcome::NoCategories) => {
                return Err(CliError::Arguments(
                    "No categories selected. Use `impostor category toggle <id>` first.".into(),
                ));
            }
            Err(err) => {
                error!(error = %err, "Failed to start game");
                return Err(CliError::Core(english(SOMETHING_WENT_WRONG_KEY)));
            }
        }

        reveal(&mut ctx.store)?;

        ctx.store.start_discussion();
        clear_screen();
        println!("🗣  Discussion time! Take turns describing the word without saying it.");
        wait_for_enter("Press Enter when you are ready to reveal the impostors.")?;

        ctx.store.end_game();
        print!("{}", render_results(&ctx.store));

        ctx.store.new_game();
        if !prompt_confirmation("Play another round?")? {
            return Ok(());
        }
    }
}

/// Walk the reveal cursor across every player.
fn reveal(store: &mut GameStore) -> Result<(), CliError> {
    while store.state().phase == Phase::WordReveal {
        let Some(player) = store.current_reveal_player() else {
            break;
        };
        let index = player.id - 1;
        let name = player.name.clone();

        clear_screen();
        wait_for_enter(&format!(
            "Pass the device to {name}. Press Enter when only {name} is looking."
        ))?;
        if let Some(card) = store.reveal_card(index) {
            println!("{}", render_card(&card));
        }
        wait_for_enter("Press Enter to hide your card.")?;
        store.next_reveal_player();
    }
    clear_screen();
    Ok(())
}

fn render_card(card: &RevealCard) -> String {
    match card {
        RevealCard::Word { word, category } => format!(
            "The secret word is: {word}\nCategory: {}",
            category_label(category)
        ),
        RevealCard::Impostor { hints: Some(hints) } if !hints.is_empty() => format!(
            "🎭 You are the IMPOSTOR!\nHints: {}",
            hints.join(", ")
        ),
        RevealCard::Impostor { .. } => "🎭 You are the IMPOSTOR!".to_string(),
    }
}

fn render_results(store: &GameStore) -> String {
    let state = store.state();
    let impostors: Vec<&str> = store.impostors().map(|p| p.name.as_str()).collect();
    let label = if impostors.len() == 1 {
        "The impostor was"
    } else {
        "The impostors were"
    };

    format!(
        "{label}: {}\nThe word was: {} ({})\n",
        impostors.join(", "),
        state.current_word,
        category_label(&state.current_category)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_word_card() {
        let card = RevealCard::Word {
            word: "Pizza".into(),
            category: "food".into(),
        };
        assert_eq!(
            render_card(&card),
            "The secret word is: Pizza\nCategory: 🍕 Food"
        );
    }

    #[test]
    fn test_render_impostor_cards() {
        let with_hints = RevealCard::Impostor {
            hints: Some(vec!["Cheese".into(), "Oven".into()]),
        };
        assert!(render_card(&with_hints).ends_with("Hints: Cheese, Oven"));

        let hidden = RevealCard::Impostor { hints: None };
        assert_eq!(render_card(&hidden), "🎭 You are the IMPOSTOR!");
    }
}
