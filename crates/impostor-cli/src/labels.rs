//! English labels for the terminal front-end.

use impostor_core::BUILTIN_CATEGORIES;
use impostor_core::ports::{PLAYER_LABEL_KEY, SOMETHING_WENT_WRONG_KEY};

/// Translator for English. Unknown keys are echoed back.
pub fn english(key: &str) -> String {
    let label = match key {
        PLAYER_LABEL_KEY => "Player",
        SOMETHING_WENT_WRONG_KEY => "Something went wrong. Please try again.",
        "animals" => "🐾 Animals",
        "food" => "🍕 Food",
        "objects" => "📱 Objects",
        "places" => "🌍 Places",
        "movies" => "🎬 Movies",
        "people" => "💼 People",
        other => other,
    };
    label.to_string()
}

/// Display name for a category id; custom categories show as typed.
pub fn category_label(id: &str) -> String {
    if BUILTIN_CATEGORIES.contains(&id) {
        english(id)
    } else {
        id.to_string()
    }
}
