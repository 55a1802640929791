//! Label lookup port.

/// Key under which the default player label is looked up.
pub const PLAYER_LABEL_KEY: &str = "player";

/// Key for the generic failure notification.
pub const SOMETHING_WENT_WRONG_KEY: &str = "somethingWentWrong";

/// Resolves a translation key to a display string.
///
/// Any `Fn(&str) -> String` closure is a translator, so callers can pass a
/// lookup table without declaring a type.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Default name for the seat at 0-based `index` ("Player 3").
pub fn default_player_name(t: &dyn Translator, index: usize) -> String {
    format!("{} {}", t.translate(PLAYER_LABEL_KEY), index + 1)
}
