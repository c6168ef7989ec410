use wordbook_types::{Meaning, Word};

use crate::error::{LookupError, Result};
use crate::preprocess::normalize_word;
use crate::store::WordStore;

/// Source of meanings for words that are not cached yet
pub trait DictionaryLookup {
    fn search(&self, word: &str) -> std::result::Result<Vec<Meaning>, LookupError>;
}

/// Look a word up, preferring the cached copy in the store.
///
/// A cache miss asks the dictionary and stores the answer, so the next lookup is served
/// locally. Lookup failures are returned as-is and nothing is cached.
pub fn search_word<S, L>(store: &mut S, lookup: &L, word: &str) -> Result<Word>
where
    S: WordStore + ?Sized,
    L: DictionaryLookup + ?Sized,
{
    let key = normalize_word(word);
    if key.is_empty() {
        return Err(LookupError::NotFound(word.to_string()).into());
    }

    if let Some(cached) = store.get_word(&key)? {
        tracing::debug!("'{key}' served from cache");
        return Ok(cached);
    }

    let meanings = lookup.search(&key)?;
    tracing::info!("'{key}' looked up: {} meanings", meanings.len());
    store.add_word(&key, &meanings)?;

    Ok(Word {
        word: key,
        meanings,
    })
}
