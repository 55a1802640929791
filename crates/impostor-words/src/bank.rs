//! JSON word bank implementing the `WordService` port.
//!
//! A bank document maps categories to difficulty pools:
//!
//! ```json
//! { "animals": { "easy": [ { "word": "Cat", "hints": ["Pet", "Whiskers"] } ] } }
//! ```
//!
//! Category names are matched case-insensitively.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use impostor_core::ports::choose;
use impostor_core::{
    Difficulty, Locale, RandomSource, WordService, WordServiceError, WordWithHints,
};

use crate::error::WordBankError;

/// English bank bundled with the binary.
const BUILTIN_EN: &str = include_str!("../data/words.en.json");

type RawBank = HashMap<String, HashMap<String, Vec<WordWithHints>>>;
type Pools = HashMap<Difficulty, Vec<WordWithHints>>;

/// In-memory word bank for one language.
pub struct JsonWordBank {
    locale: Locale,
    categories: HashMap<String, Pools>,
    random: Mutex<Box<dyn RandomSource>>,
}

impl JsonWordBank {
    /// The bank that ships with the game (English, built-in categories).
    pub fn builtin(random: Box<dyn RandomSource>) -> Result<Self, WordBankError> {
        Self::from_json(Locale::new("en"), BUILTIN_EN, random)
    }

    /// Parse a bank document for `locale`.
    pub fn from_json(
        locale: Locale,
        json: &str,
        random: Box<dyn RandomSource>,
    ) -> Result<Self, WordBankError> {
        let mut bank = Self {
            locale,
            categories: HashMap::new(),
            random: Mutex::new(random),
        };
        bank.merge_json(json)?;
        Ok(bank)
    }

    /// Add the categories of another document. Words for a category that
    /// already exists are appended to its pools.
    pub fn merge_json(&mut self, json: &str) -> Result<(), WordBankError> {
        let raw: RawBank =
            serde_json::from_str(json).map_err(|e| WordBankError::Parse(e.to_string()))?;

        for (category, levels) in raw {
            let pools = self.categories.entry(normalize(&category)).or_default();
            for (level, words) in levels {
                let difficulty =
                    Difficulty::parse(&level).ok_or_else(|| WordBankError::UnknownDifficulty {
                        category: category.clone(),
                        level: level.clone(),
                    })?;
                pools.entry(difficulty).or_default().extend(words);
            }
        }
        Ok(())
    }

    /// Merge a bank document from disk.
    pub fn merge_file(&mut self, path: &Path) -> Result<(), WordBankError> {
        let json = fs::read_to_string(path).map_err(|e| WordBankError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.merge_json(&json)?;
        debug!(path = %path.display(), "Merged word bank");
        Ok(())
    }

    /// Known categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Number of words available for `category` at `difficulty`.
    pub fn pool_size(&self, category: &str, difficulty: Difficulty) -> usize {
        self.categories
            .get(&normalize(category))
            .and_then(|pools| pools.get(&difficulty))
            .map_or(0, Vec::len)
    }
}

fn normalize(category: &str) -> String {
    category.trim().to_lowercase()
}

#[async_trait]
impl WordService for JsonWordBank {
    async fn random_word(
        &self,
        category: &str,
        locale: &Locale,
        difficulty: Difficulty,
    ) -> Result<WordWithHints, WordServiceError> {
        if locale != &self.locale {
            debug!(requested = %locale, bank = %self.locale, "Falling back to bank language");
        }

        let pools = self
            .categories
            .get(&normalize(category))
            .ok_or_else(|| WordServiceError::UnknownCategory(category.to_string()))?;
        let pool = pools.get(&difficulty).map_or(&[][..], Vec::as_slice);

        let mut random = self
            .random
            .lock()
            .map_err(|_| WordServiceError::Unavailable("random source poisoned".to_string()))?;
        choose(random.as_mut(), pool)
            .cloned()
            .ok_or_else(|| WordServiceError::NoWords {
                category: category.to_string(),
                difficulty,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impostor_core::{BUILTIN_CATEGORIES, StdRandom};

    fn bank(json: &str) -> JsonWordBank {
        JsonWordBank::from_json(Locale::new("en"), json, Box::new(StdRandom::seeded(9))).unwrap()
    }

    #[test]
    fn test_builtin_covers_builtin_categories() {
        let bank = JsonWordBank::builtin(Box::new(StdRandom::seeded(1))).unwrap();
        for category in BUILTIN_CATEGORIES {
            for difficulty in Difficulty::ALL {
                assert!(
                    bank.pool_size(category, difficulty) > 0,
                    "{category}/{difficulty} is empty"
                );
            }
        }
    }

    #[tokio::test]
    async fn test_draws_from_requested_pool() {
        let bank = bank(
            r#"{
                "Cars": {
                    "easy": [{"word": "Taxi", "hints": ["Yellow"]}],
                    "hard": [{"word": "Carburetor", "hints": ["Engine", "Fuel"]}]
                }
            }"#,
        );

        for _ in 0..5 {
            let word = bank
                .random_word("cars", &Locale::new("en"), Difficulty::Hard)
                .await
                .unwrap();
            assert_eq!(word.word, "Carburetor");
            assert_eq!(word.hints, vec!["Engine", "Fuel"]);
        }
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let bank = bank(r#"{"food": {"easy": [{"word": "Pie", "hints": []}]}}"#);
        let err = bank
            .random_word("sports", &Locale::default(), Difficulty::Easy)
            .await
            .unwrap_err();
        assert_eq!(err, WordServiceError::UnknownCategory("sports".to_string()));
    }

    #[tokio::test]
    async fn test_empty_pool() {
        let bank = bank(r#"{"food": {"easy": [{"word": "Pie", "hints": []}]}}"#);
        let err = bank
            .random_word("food", &Locale::new("es"), Difficulty::Medium)
            .await
            .unwrap_err();
        assert!(matches!(err, WordServiceError::NoWords { .. }));
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let result = JsonWordBank::from_json(
            Locale::default(),
            r#"{"food": {"insane": []}}"#,
            Box::new(StdRandom::seeded(0)),
        );
        assert!(matches!(
            result,
            Err(WordBankError::UnknownDifficulty { .. })
        ));
    }

    #[test]
    fn test_merge_appends_words() {
        let mut bank = bank(r#"{"food": {"easy": [{"word": "Pie", "hints": []}]}}"#);
        bank.merge_json(r#"{"FOOD": {"easy": [{"word": "Soup", "hints": []}]}, "cars": {}}"#)
            .unwrap();

        assert_eq!(bank.pool_size("food", Difficulty::Easy), 2);
        assert_eq!(bank.categories(), vec!["cars", "food"]);
    }

    #[test]
    fn test_merge_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.json");
        fs::write(
            &path,
            r#"{"board games": {"medium": [{"word": "Chess", "hints": ["Checkmate"]}]}}"#,
        )
        .unwrap();

        let mut bank = bank("{}");
        bank.merge_file(&path).unwrap();
        assert_eq!(bank.pool_size("Board Games", Difficulty::Medium), 1);

        let missing = bank.merge_file(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(WordBankError::Io { .. })));
    }
}
