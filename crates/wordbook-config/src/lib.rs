use serde::{Deserialize, Serialize};

use self::database::DatabaseConfig;
use self::dictionary::DictionaryConfig;
use self::listing::ListingConfig;
use self::quiz::QuizConfig;

pub mod database;
pub mod dictionary;
pub mod listing;
pub mod quiz;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub quiz: QuizConfig,
    pub dictionary: DictionaryConfig,
    pub listing: ListingConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            database: DatabaseConfig::new(),
            quiz: QuizConfig::default(),
            dictionary: DictionaryConfig::default(),
            listing: ListingConfig::default(),
        }
    }

    /// Re-apply environment overrides on top of a loaded profile
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("WORDBOOK_DB") {
            self.database.path = path;
        }
        self
    }
}
