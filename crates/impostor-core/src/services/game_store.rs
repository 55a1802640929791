//! Game store - the single owner of game state.
//!
//! The store holds the setup configuration and the round in progress, and
//! exposes the mutators the UI calls. It is constructed explicitly with its
//! collaborators and handed to the UI by reference; there is no global store.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::{
    Difficulty, GameState, Locale, MAX_PLAYERS, MIN_PLAYERS, Phase, Player, RevealCard, Role,
    max_impostors,
};
use crate::persistence::{PersistedConfig, PersistedGameConfig};
use crate::ports::{
    CoreError, RandomSource, Translator, WordService, choose, default_player_name, shuffle,
};

/// Result of a [`GameStore::start_game`] call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Roles were dealt and a word drawn from `category`.
    Started { category: String },
    /// No category is selected; nothing changed.
    NoCategories,
    /// A round is already running; nothing changed.
    AlreadyStarted,
}

/// State container for setup, role assignment and phase transitions.
pub struct GameStore {
    state: GameState,
    player_names: Vec<String>,
    custom_categories: Vec<String>,
    has_hydrated: bool,
    words: Arc<dyn WordService>,
    random: Box<dyn RandomSource>,
}

impl GameStore {
    /// Create a store with default configuration.
    pub fn new(words: Arc<dyn WordService>, random: Box<dyn RandomSource>) -> Self {
        Self {
            state: GameState::default(),
            player_names: Vec::new(),
            custom_categories: Vec::new(),
            has_hydrated: false,
            words,
            random,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    pub fn custom_categories(&self) -> &[String] {
        &self.custom_categories
    }

    pub const fn has_hydrated(&self) -> bool {
        self.has_hydrated
    }

    pub fn set_has_hydrated(&mut self, hydrated: bool) {
        self.has_hydrated = hydrated;
    }

    // ------------------------------------------------------------------
    // Setup
    // ------------------------------------------------------------------

    /// Resize the table to `count` seats (clamped to 3..=10).
    ///
    /// Existing names are kept; empty or new seats get the default label.
    /// The impostor count is capped at a third of the table.
    pub fn set_player_count(&mut self, count: usize, t: &dyn Translator) {
        let clamped = count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        if clamped != count {
            warn!(requested = count, clamped, "Player count out of range");
        }

        self.player_names = (0..clamped)
            .map(|i| match self.player_names.get(i) {
                Some(name) if !name.is_empty() => name.clone(),
                _ => default_player_name(t, i),
            })
            .collect();

        self.state.total_players = clamped;
        self.state.impostor_count = self.state.impostor_count.min(clamped / 3).max(1);
        debug!(
            total_players = clamped,
            impostor_count = self.state.impostor_count,
            "Player count updated"
        );
    }

    /// Rename the seat at 0-based `index`. Indices past the table are ignored.
    pub fn set_player_name(&mut self, index: usize, name: impl Into<String>) {
        if index >= self.state.total_players {
            warn!(
                index,
                total_players = self.state.total_players,
                "Ignoring name for seat outside the table"
            );
            return;
        }
        if self.player_names.len() <= index {
            self.player_names.resize(index + 1, String::new());
        }
        self.player_names[index] = name.into();
    }

    /// Set the number of impostors, clamped to `1..total_players`.
    pub fn set_impostor_count(&mut self, count: usize) {
        let clamped = count.clamp(1, max_impostors(self.state.total_players));
        if clamped != count {
            warn!(requested = count, clamped, "Impostor count out of range");
        }
        self.state.impostor_count = clamped;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
    }

    /// Select `category` if unselected, otherwise deselect it.
    pub fn toggle_category(&mut self, category: &str) {
        let selected = &mut self.state.selected_categories;
        if let Some(pos) = selected.iter().position(|c| c == category) {
            selected.remove(pos);
        } else {
            selected.push(category.to_string());
        }
    }

    /// Register and select a custom category. Blank names are ignored.
    pub fn add_custom_category(&mut self, category: &str) {
        let category = category.trim();
        if category.is_empty() {
            return;
        }

        if !self.custom_categories.iter().any(|c| c == category) {
            self.custom_categories.push(category.to_string());
        }
        if !self.state.selected_categories.iter().any(|c| c == category) {
            self.state.selected_categories.push(category.to_string());
        }
        self.state.custom_category.clear();
        debug!(category, "Custom category added");
    }

    /// Forget a custom category and deselect it.
    pub fn remove_custom_category(&mut self, category: &str) {
        self.custom_categories.retain(|c| c != category);
        self.state.selected_categories.retain(|c| c != category);
    }

    /// Update the scratch text of the custom category input.
    pub fn set_custom_category(&mut self, text: impl Into<String>) {
        self.state.custom_category = text.into();
    }

    pub fn toggle_hints(&mut self) {
        self.state.show_hints_to_impostors = !self.state.show_hints_to_impostors;
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.state.phase = phase;
    }

    // ------------------------------------------------------------------
    // Round lifecycle
    // ------------------------------------------------------------------

    /// Deal roles, draw a word and move to the word reveal.
    ///
    /// Nothing is committed until the word service answers; if it fails the
    /// error is returned and the state is left as it was.
    pub async fn start_game(
        &mut self,
        t: &dyn Translator,
        locale: &Locale,
    ) -> Result<StartOutcome, CoreError> {
        if self.state.game_started {
            warn!("start_game called while a round is running");
            return Ok(StartOutcome::AlreadyStarted);
        }
        if self.state.selected_categories.is_empty() {
            error!("No categories selected");
            return Ok(StartOutcome::NoCategories);
        }

        let total = self.state.total_players;
        let mut players: Vec<Player> = (0..total)
            .map(|i| Player {
                id: i + 1,
                name: match self.player_names.get(i) {
                    Some(name) if !name.is_empty() => name.clone(),
                    _ => default_player_name(t, i),
                },
                role: Role::Player,
            })
            .collect();

        let mut seats: Vec<usize> = (0..total).collect();
        shuffle(self.random.as_mut(), &mut seats);
        let impostors = self.state.impostor_count.min(max_impostors(total));
        for &seat in seats.iter().take(impostors) {
            players[seat].role = Role::Impostor;
        }

        let category = choose(self.random.as_mut(), &self.state.selected_categories)
            .cloned()
            .unwrap_or_default();
        let drawn = self
            .words
            .random_word(&category, locale, self.state.difficulty)
            .await?;

        info!(
            category = %category,
            word = %drawn.word,
            hints = %drawn.hints.join(", "),
            players = total,
            impostors,
            "Starting game"
        );

        self.state.phase = Phase::WordReveal;
        self.state.game_started = true;
        self.state.players = players;
        self.state.current_word = drawn.word;
        self.state.current_hints = drawn.hints;
        self.state.current_category.clone_from(&category);
        self.state.current_reveal_index = 0;

        Ok(StartOutcome::Started { category })
    }

    /// Advance the reveal cursor. It stops at the player count, which marks
    /// the reveal as complete.
    pub fn next_reveal_player(&mut self) {
        let next = self.state.current_reveal_index + 1;
        self.state.current_reveal_index = next.min(self.state.players.len());
    }

    pub fn start_discussion(&mut self) {
        self.state.phase = Phase::Discussion;
    }

    pub fn end_game(&mut self) {
        self.state.phase = Phase::Results;
    }

    /// Clear the round and return to setup, keeping the configuration.
    pub fn new_game(&mut self) {
        let state = &mut self.state;
        state.phase = Phase::Setup;
        state.game_started = false;
        state.current_reveal_index = 0;
        state.players.clear();
        state.current_word.clear();
        state.current_hints.clear();
        state.current_category.clear();
    }

    // ------------------------------------------------------------------
    // Reveal view
    // ------------------------------------------------------------------

    /// The player whose turn it is to look, if the reveal is not finished.
    pub fn current_reveal_player(&self) -> Option<&Player> {
        self.state.players.get(self.state.current_reveal_index)
    }

    pub fn reveal_is_complete(&self) -> bool {
        self.state.game_started && self.state.current_reveal_index >= self.state.players.len()
    }

    /// What the player at `index` is shown during the reveal.
    pub fn reveal_card(&self, index: usize) -> Option<RevealCard> {
        let player = self.state.players.get(index)?;
        let card = match player.role {
            Role::Player => RevealCard::Word {
                word: self.state.current_word.clone(),
                category: self.state.current_category.clone(),
            },
            Role::Impostor => RevealCard::Impostor {
                hints: self
                    .state
                    .show_hints_to_impostors
                    .then(|| self.state.current_hints.clone()),
            },
        };
        Some(card)
    }

    pub fn impostors(&self) -> impl Iterator<Item = &Player> {
        self.state.players.iter().filter(|p| p.is_impostor())
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// The subset of state that survives a session.
    pub fn snapshot(&self) -> PersistedConfig {
        PersistedConfig {
            custom_categories: self.custom_categories.clone(),
            player_names: self.player_names.clone(),
            game_state: PersistedGameConfig {
                total_players: self.state.total_players,
                impostor_count: self.state.impostor_count,
                difficulty: self.state.difficulty,
                selected_categories: self.state.selected_categories.clone(),
                show_hints_to_impostors: self.state.show_hints_to_impostors,
            },
        }
    }

    /// Apply a persisted configuration (if any) and mark the store hydrated.
    ///
    /// Stored counts are re-clamped so an edited slot cannot break the
    /// impostor invariant.
    pub fn hydrate(&mut self, config: Option<PersistedConfig>) {
        if let Some(config) = config {
            let game = config.game_state;
            let total = game.total_players.clamp(MIN_PLAYERS, MAX_PLAYERS);

            self.custom_categories = config.custom_categories;
            self.player_names = config.player_names;
            self.player_names.truncate(total);
            self.state.total_players = total;
            self.state.impostor_count = game.impostor_count.clamp(1, max_impostors(total));
            self.state.difficulty = game.difficulty;
            self.state.selected_categories = game.selected_categories;
            self.state.show_hints_to_impostors = game.show_hints_to_impostors;
            debug!(total_players = total, "Store hydrated from saved config");
        }
        self.has_hydrated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{StdRandom, WordServiceError, WordWithHints};
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        Words {}

        #[async_trait]
        impl WordService for Words {
            async fn random_word(
                &self,
                category: &str,
                locale: &Locale,
                difficulty: Difficulty,
            ) -> Result<WordWithHints, WordServiceError>;
        }
    }

    fn label(key: &str) -> String {
        match key {
            "player" => "Player".to_string(),
            other => other.to_string(),
        }
    }

    fn pizza() -> WordWithHints {
        WordWithHints {
            word: "Pizza".to_string(),
            hints: vec!["Italian".to_string(), "Cheese".to_string()],
        }
    }

    fn store_with(words: MockWords) -> GameStore {
        GameStore::new(Arc::new(words), Box::new(StdRandom::seeded(11)))
    }

    fn idle_store() -> GameStore {
        store_with(MockWords::new())
    }

    #[test]
    fn test_set_player_count_resizes_names() {
        let mut store = idle_store();
        for count in MIN_PLAYERS..=MAX_PLAYERS {
            store.set_player_count(count, &label);
            assert_eq!(store.player_names().len(), count);
            assert_eq!(store.state().total_players, count);
        }
    }

    #[test]
    fn test_set_player_count_keeps_existing_names() {
        let mut store = idle_store();
        store.set_player_count(3, &label);
        store.set_player_name(1, "Bea");
        store.set_player_count(5, &label);

        assert_eq!(
            store.player_names(),
            &["Player 1", "Bea", "Player 3", "Player 4", "Player 5"]
        );

        store.set_player_count(3, &label);
        assert_eq!(store.player_names(), &["Player 1", "Bea", "Player 3"]);
    }

    #[test]
    fn test_set_player_count_out_of_range_is_clamped() {
        let mut store = idle_store();
        store.set_player_count(1, &label);
        assert_eq!(store.state().total_players, MIN_PLAYERS);
        store.set_player_count(42, &label);
        assert_eq!(store.state().total_players, MAX_PLAYERS);
    }

    #[test]
    fn test_impostor_count_clamped_to_third() {
        let mut store = idle_store();
        store.set_player_count(9, &label);
        store.set_impostor_count(3);
        store.set_player_count(6, &label);
        assert_eq!(store.state().impostor_count, 2);
        store.set_player_count(4, &label);
        assert_eq!(store.state().impostor_count, 1);

        for count in MIN_PLAYERS..=MAX_PLAYERS {
            store.set_player_count(count, &label);
            assert!(store.state().impostor_count < store.state().total_players);
            assert!(store.state().impostor_count <= count / 3);
        }
    }

    #[test]
    fn test_set_impostor_count_bounds() {
        let mut store = idle_store();
        store.set_player_count(5, &label);
        store.set_impostor_count(0);
        assert_eq!(store.state().impostor_count, 1);
        store.set_impostor_count(5);
        assert_eq!(store.state().impostor_count, 4);
        store.set_impostor_count(2);
        assert_eq!(store.state().impostor_count, 2);
    }

    #[test]
    fn test_set_player_name_outside_table_ignored() {
        let mut store = idle_store();
        store.set_player_name(7, "Nobody");
        assert!(store.player_names().is_empty());

        store.set_player_name(2, "Cy");
        assert_eq!(store.player_names(), &["", "", "Cy"]);
    }

    #[test]
    fn test_toggle_category_is_own_inverse() {
        let mut store = idle_store();
        let before = store.state().selected_categories.clone();

        store.toggle_category("food");
        assert!(!store.state().selected_categories.contains(&"food".to_string()));
        store.toggle_category("food");

        let mut after = store.state().selected_categories.clone();
        let mut expected = before;
        after.sort();
        expected.sort();
        assert_eq!(after, expected);

        store.toggle_category("sports");
        store.toggle_category("sports");
        assert!(!store.state().selected_categories.contains(&"sports".to_string()));
    }

    #[test]
    fn test_add_then_remove_custom_category_restores() {
        let mut store = idle_store();
        let selected = store.state().selected_categories.clone();
        let custom = store.custom_categories().to_vec();

        store.set_custom_category("board games");
        store.add_custom_category("board games");
        assert_eq!(store.custom_categories(), &["board games"]);
        assert!(store.state().custom_category.is_empty());
        assert_eq!(
            store.state().selected_categories.last().map(String::as_str),
            Some("board games")
        );

        store.remove_custom_category("board games");
        assert_eq!(store.state().selected_categories, selected);
        assert_eq!(store.custom_categories(), custom.as_slice());
    }

    #[test]
    fn test_add_custom_category_is_idempotent() {
        let mut store = idle_store();
        store.add_custom_category("  cars ");
        store.add_custom_category("cars");
        store.add_custom_category("   ");

        assert_eq!(store.custom_categories(), &["cars"]);
        let count = store
            .state()
            .selected_categories
            .iter()
            .filter(|c| *c == "cars")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_toggle_hints_and_difficulty() {
        let mut store = idle_store();
        store.toggle_hints();
        assert!(!store.state().show_hints_to_impostors);
        store.toggle_hints();
        assert!(store.state().show_hints_to_impostors);

        store.set_difficulty(Difficulty::Hard);
        assert_eq!(store.state().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_set_phase_only_touches_phase() {
        let mut store = idle_store();
        store.set_phase(Phase::Discussion);
        assert_eq!(store.state().phase, Phase::Discussion);
        assert!(store.state().players.is_empty());
        assert_eq!(store.state().total_players, 3);
    }

    #[tokio::test]
    async fn test_start_game_without_categories() {
        let mut words = MockWords::new();
        words.expect_random_word().never();
        let mut store = store_with(words);
        for category in store.state().selected_categories.clone() {
            store.toggle_category(&category);
        }

        let outcome = store.start_game(&label, &Locale::default()).await.unwrap();

        assert_eq!(outcome, StartOutcome::NoCategories);
        assert_eq!(store.state().phase, Phase::Setup);
        assert!(!store.state().game_started);
        assert!(store.state().players.is_empty());
    }

    #[tokio::test]
    async fn test_start_game_deals_roles() {
        let mut words = MockWords::new();
        words
            .expect_random_word()
            .withf(|category, locale, difficulty| {
                category == "food" && locale.as_str() == "es" && *difficulty == Difficulty::Easy
            })
            .times(1)
            .returning(|_, _, _| Ok(pizza()));
        let mut store = store_with(words);
        store.set_player_count(5, &label);
        store.set_impostor_count(2);
        store.set_difficulty(Difficulty::Easy);
        store.set_player_name(0, "Ana");
        for category in store.state().selected_categories.clone() {
            if category != "food" {
                store.toggle_category(&category);
            }
        }

        let outcome = store.start_game(&label, &Locale::new("es")).await.unwrap();

        assert_eq!(
            outcome,
            StartOutcome::Started {
                category: "food".to_string()
            }
        );
        let state = store.state();
        assert_eq!(state.phase, Phase::WordReveal);
        assert!(state.game_started);
        assert_eq!(state.current_reveal_index, 0);
        assert_eq!(state.players.len(), 5);
        assert_eq!(state.players.iter().filter(|p| p.is_impostor()).count(), 2);
        assert_eq!(
            state.players.iter().filter(|p| p.role == Role::Player).count(),
            3
        );
        assert_eq!(state.players[0].name, "Ana");
        assert_eq!(state.players[4].name, "Player 5");
        assert_eq!(
            state.players.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(state.current_word, "Pizza");
        assert_eq!(state.current_hints, vec!["Italian", "Cheese"]);
        assert_eq!(state.current_category, "food");
    }

    #[tokio::test]
    async fn test_start_game_failure_leaves_state() {
        let mut words = MockWords::new();
        words
            .expect_random_word()
            .returning(|_, _, _| Err(WordServiceError::Unavailable("offline".to_string())));
        let mut store = store_with(words);
        let before = store.state().clone();

        let err = store
            .start_game(&label, &Locale::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::WordService(_)));
        assert_eq!(store.state(), &before);
    }

    #[tokio::test]
    async fn test_start_game_twice_is_ignored() {
        let mut words = MockWords::new();
        words
            .expect_random_word()
            .times(1)
            .returning(|_, _, _| Ok(pizza()));
        let mut store = store_with(words);

        store.start_game(&label, &Locale::default()).await.unwrap();
        let outcome = store.start_game(&label, &Locale::default()).await.unwrap();

        assert_eq!(outcome, StartOutcome::AlreadyStarted);
    }

    #[tokio::test]
    async fn test_reveal_and_phases() {
        let mut words = MockWords::new();
        words.expect_random_word().returning(|_, _, _| Ok(pizza()));
        let mut store = store_with(words);
        store.start_game(&label, &Locale::default()).await.unwrap();

        for index in 0..3 {
            let player = store.current_reveal_player().unwrap();
            assert_eq!(player.id, index + 1);
            let card = store.reveal_card(index).unwrap();
            match (player.role, card) {
                (Role::Player, RevealCard::Word { word, category }) => {
                    assert_eq!(word, "Pizza");
                    assert!(!category.is_empty());
                }
                (Role::Impostor, RevealCard::Impostor { hints }) => {
                    assert_eq!(hints.unwrap().len(), 2);
                }
                (role, card) => panic!("{role} got {card:?}"),
            }
            store.next_reveal_player();
        }

        assert!(store.reveal_is_complete());
        assert!(store.current_reveal_player().is_none());
        store.next_reveal_player();
        assert_eq!(store.state().current_reveal_index, 3);

        store.start_discussion();
        assert_eq!(store.state().phase, Phase::Discussion);
        store.end_game();
        assert_eq!(store.state().phase, Phase::Results);
        assert_eq!(store.impostors().count(), 1);
    }

    #[tokio::test]
    async fn test_hidden_hints_for_impostor() {
        let mut words = MockWords::new();
        words.expect_random_word().returning(|_, _, _| Ok(pizza()));
        let mut store = store_with(words);
        store.toggle_hints();
        store.start_game(&label, &Locale::default()).await.unwrap();

        let seat = store
            .state()
            .players
            .iter()
            .position(Player::is_impostor)
            .unwrap();
        assert_eq!(
            store.reveal_card(seat),
            Some(RevealCard::Impostor { hints: None })
        );
        assert_eq!(store.reveal_card(99), None);
    }

    #[tokio::test]
    async fn test_new_game_keeps_setup() {
        let mut words = MockWords::new();
        words.expect_random_word().returning(|_, _, _| Ok(pizza()));
        let mut store = store_with(words);
        store.set_player_count(4, &label);
        store.add_custom_category("cars");
        store.start_game(&label, &Locale::default()).await.unwrap();
        store.next_reveal_player();
        store.end_game();

        let selected = store.state().selected_categories.clone();
        let names = store.player_names().to_vec();
        store.new_game();

        let state = store.state();
        assert_eq!(state.phase, Phase::Setup);
        assert!(!state.game_started);
        assert_eq!(state.current_reveal_index, 0);
        assert!(state.players.is_empty());
        assert!(state.current_word.is_empty());
        assert!(state.current_hints.is_empty());
        assert!(state.current_category.is_empty());
        assert_eq!(state.selected_categories, selected);
        assert_eq!(store.custom_categories(), &["cars"]);
        assert_eq!(store.player_names(), names.as_slice());
    }

    #[test]
    fn test_snapshot_and_hydrate() {
        let mut source = idle_store();
        source.set_player_count(6, &label);
        source.set_impostor_count(2);
        source.set_player_name(0, "Ana");
        source.add_custom_category("cars");
        source.set_difficulty(Difficulty::Hard);
        source.toggle_hints();

        let mut target = idle_store();
        assert!(!target.has_hydrated());
        target.hydrate(Some(source.snapshot()));

        assert!(target.has_hydrated());
        assert_eq!(target.snapshot(), source.snapshot());
        assert_eq!(target.state().total_players, 6);
        assert_eq!(target.state().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_hydrate_reclamps_counts() {
        let mut store = idle_store();
        let mut config = store.snapshot();
        config.game_state.total_players = 3;
        config.game_state.impostor_count = 5;

        store.hydrate(Some(config));
        assert_eq!(store.state().impostor_count, 2);

        let mut empty = idle_store();
        empty.hydrate(None);
        assert!(empty.has_hydrated());
        assert_eq!(empty.state(), &GameState::default());
    }
}
