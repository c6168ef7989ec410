use anyhow::Context;
use wordbook_config::Config;
use wordbook_core::BookmarkSelectionEngine;
use wordbook_sqlite::SqliteWordbook;

use crate::dictionary::JsonDictionary;

/// Loaded config plus the open store, shared by every command
pub struct AppState {
    pub config: Config,
    pub store: SqliteWordbook,
}

impl AppState {
    pub fn open(config: Config) -> anyhow::Result<Self> {
        let store = SqliteWordbook::open(&config.database.path)
            .with_context(|| format!("opening wordbook at {}", config.database.path))?;

        Ok(Self { config, store })
    }

    pub fn engine(&self) -> BookmarkSelectionEngine<&SqliteWordbook> {
        BookmarkSelectionEngine::new(&self.store)
    }

    /// Offline dictionary from the configured files; empty when disabled
    pub fn dictionary(&self) -> anyhow::Result<JsonDictionary> {
        if !self.config.dictionary.enabled {
            tracing::info!("dictionary disabled, only cached words are available");
            return Ok(JsonDictionary::new());
        }

        let dictionary = JsonDictionary::from_paths(self.config.dictionary.paths.as_slice())
            .context("loading dictionary files")?;
        tracing::debug!("dictionary has {} entries", dictionary.len());

        Ok(dictionary)
    }

    pub fn close(self) -> anyhow::Result<()> {
        self.store.close().context("closing wordbook")
    }
}
