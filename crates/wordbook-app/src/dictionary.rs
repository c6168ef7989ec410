use std::collections::HashMap;
use std::fs;
use std::path::Path;

use wordbook_core::preprocess::normalize_word;
use wordbook_core::{DictionaryLookup, LookupError};
use wordbook_types::Meaning;

/// Offline dictionary read from JSON files shaped `{ "word": [meaning, ...] }`
#[derive(Debug, Default)]
pub struct JsonDictionary {
    entries: HashMap<String, Vec<Meaning>>,
}

impl JsonDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every file in order, later files override earlier ones
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self, LookupError> {
        let mut dictionary = Self::new();
        for path in paths {
            dictionary.load(path.as_ref())?;
        }
        Ok(dictionary)
    }

    pub fn load(&mut self, path: &Path) -> Result<(), LookupError> {
        let data = fs::read_to_string(path)?;
        let entries: HashMap<String, Vec<Meaning>> = serde_json::from_str(&data)
            .map_err(|e| LookupError::Parse(format!("{}: {e}", path.display())))?;

        let count = entries.len();
        for (word, meanings) in entries {
            self.entries.insert(normalize_word(&word), meanings);
        }
        tracing::info!("loaded {count} entries from {}", path.display());

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DictionaryLookup for JsonDictionary {
    fn search(&self, word: &str) -> Result<Vec<Meaning>, LookupError> {
        self.entries
            .get(&normalize_word(word))
            .cloned()
            .ok_or_else(|| LookupError::NotFound(word.to_string()))
    }
}
