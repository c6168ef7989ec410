//! CLI command handlers

pub mod bookmark;
pub mod profile;
pub mod quiz;
pub mod score;
pub mod search;
pub mod select;
pub mod word;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use wordbook_core::preprocess::normalize_word;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Seeded when reproducible output is wanted
pub(crate) fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Normalized storage key; blank input is rejected
pub(crate) fn word_key(word: &str) -> anyhow::Result<String> {
    let key = normalize_word(word);
    anyhow::ensure!(!key.is_empty(), "word must not be blank");
    Ok(key)
}
