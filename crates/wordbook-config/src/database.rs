use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("wordbook").join("wordbook.db"))
        .unwrap_or_else(|| PathBuf::from("wordbook.db"))
        .to_string_lossy()
        .into_owned()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, or `:memory:` for a throwaway store
    #[serde(default = "default_path")]
    pub path: String,
}

impl DatabaseConfig {
    pub fn new() -> Self {
        let path = env::var("WORDBOOK_DB").unwrap_or_else(|_| default_path());

        Self { path }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
