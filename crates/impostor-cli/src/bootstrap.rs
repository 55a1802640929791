//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Database pool and storage repository (via impostor-db)
//! - Word bank (via impostor-words)
//! - Game store and config service (via impostor-core)
//!
//! Command handlers receive the fully-composed context.

use std::path::PathBuf;
use std::sync::Arc;

use impostor_core::paths::{database_path, normalize_user_path};
use impostor_core::{
    ConfigService, CoreError, GameStore, Locale, PersistenceError, RandomSource, StdRandom,
};
use impostor_db::{CoreFactory, setup_database};
use impostor_words::JsonWordBank;
use tracing::warn;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database file; `None` resolves to the data directory.
    pub db_path: Option<PathBuf>,
    /// Language requested from the word service.
    pub locale: Locale,
    /// Extra word bank merged over the bundled one.
    pub words_path: Option<PathBuf>,
    /// Fixed seed for reproducible rounds.
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Build the bootstrap configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let db_path = cli
            .db
            .as_deref()
            .map(normalize_user_path)
            .transpose()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(Self {
            db_path,
            locale: cli.locale.clone(),
            words_path: cli.words.clone(),
            seed: cli.seed,
        })
    }

    fn random(&self, stream: u64) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(StdRandom::seeded(seed.wrapping_add(stream))),
            None => Box::new(StdRandom::from_entropy()),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The game store, hydrated from the saved configuration.
    pub store: GameStore,
    /// Persistence for the setup configuration.
    pub config: ConfigService,
    /// The word bank the store draws from.
    pub words: Arc<JsonWordBank>,
    /// Language requested from the word service.
    pub locale: Locale,
    /// Resolved database file.
    pub db_path: PathBuf,
    /// Stored version of a saved config written by a newer release.
    newer_saved_version: Option<u32>,
}

impl CliContext {
    /// Save the store's setup configuration.
    ///
    /// Refuses while a newer saved config is on disk so it is not replaced
    /// by defaults; `impostor reset` clears it.
    pub async fn persist(&self) -> Result<(), CliError> {
        if let Some(found) = self.newer_saved_version {
            return Err(CliError::Config(format!(
                "Saved config is version {found}, newer than this build supports. \
                 Run `impostor reset` to discard it."
            )));
        }
        self.config.persist(&self.store).await?;
        Ok(())
    }
}

/// Wire up storage, word bank and store, then hydrate the store.
///
/// A saved configuration that cannot be read is reported and the store
/// starts from defaults. One written by a newer release is left in place
/// and blocks [`CliContext::persist`].
pub async fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let db_path = match config.db_path.clone() {
        Some(path) => path,
        None => database_path().map_err(|e| CliError::Config(e.to_string()))?,
    };
    let pool = setup_database(&db_path)
        .await
        .map_err(|e| CliError::Database(format!("{e:#}")))?;
    let config_service = CoreFactory::build_config_service(pool);

    let mut bank =
        JsonWordBank::builtin(config.random(1)).map_err(|e| CliError::Config(e.to_string()))?;
    if let Some(path) = &config.words_path {
        let path = normalize_user_path(&path.to_string_lossy())
            .map_err(|e| CliError::Config(e.to_string()))?;
        bank.merge_file(&path)
            .map_err(|e| CliError::Config(e.to_string()))?;
    }
    let words = Arc::new(bank);

    let mut store = GameStore::new(words.clone(), config.random(0));
    let mut newer_saved_version = None;
    if let Err(err) = config_service.hydrate(&mut store).await {
        if let CoreError::Persistence(PersistenceError::UnsupportedVersion { found, .. }) = &err {
            newer_saved_version = Some(*found);
        }
        warn!(error = %err, "Ignoring unreadable saved config");
        store.set_has_hydrated(true);
    }

    Ok(CliContext {
        store,
        config: config_service,
        words,
        locale: config.locale,
        db_path,
        newer_saved_version,
    })
}
