use wordbook_types::{BookmarkView, Meaning, QuizScore, Word};

use crate::error::Result;
use crate::selection::CompiledSelection;

/// Current time as a unix timestamp (seconds, UTC)
pub fn unix_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Persisted words and their meanings
pub trait WordStore {
    /// Insert a new word. Fails with `DuplicateKey` if it already exists.
    fn add_word(&mut self, word: &str, meanings: &[Meaning]) -> Result<()>;

    /// Replace the meanings of a word, returns false if the word is unknown
    fn edit_word(&mut self, word: &str, meanings: &[Meaning]) -> Result<bool>;

    fn get_word(&self, word: &str) -> Result<Option<Word>>;

    /// Remove a word. Missing words are ignored; bookmarked words fail with `Integrity`.
    fn delete_word(&mut self, word: &str) -> Result<()>;

    fn word_count(&self) -> Result<usize>;

    /// All words, alphabetically
    fn list_words(&self) -> Result<Vec<Word>>;
}

/// Bookmarks and their paired quiz scores.
///
/// A bookmark and its score row are created and removed together, so the store never holds
/// one without the other.
pub trait BookmarkStore {
    /// Insert a bookmark and its zeroed quiz score atomically.
    ///
    /// Fails with `DuplicateKey` when the word is already bookmarked and with `Integrity`
    /// when the word does not exist.
    fn create_bookmark_with_score(&mut self, word: &str, added_date: i64) -> Result<()>;

    /// Remove a bookmark and its quiz score atomically. Missing bookmarks are ignored.
    fn delete_bookmark_with_score(&mut self, word: &str) -> Result<()>;

    fn get_bookmark(&self, word: &str) -> Result<Option<BookmarkView>>;

    fn get_quiz_score(&self, word: &str) -> Result<Option<QuizScore>>;

    /// Add to the counters, returns false if the word is not bookmarked
    fn increase_quiz_score(&mut self, word: &str, correct: u32, incorrect: u32) -> Result<bool>;

    /// Overwrite the counters, returns false if the word is not bookmarked
    fn reset_quiz_score(&mut self, word: &str, correct: u32, incorrect: u32) -> Result<bool>;

    fn bookmark_count(&self) -> Result<usize>;

    /// Remove every bookmark and quiz score, words are kept
    fn clear_bookmarks(&mut self) -> Result<()>;

    fn add_bookmark(&mut self, word: &str) -> Result<()> {
        self.create_bookmark_with_score(word, unix_timestamp())
    }

    fn delete_bookmark(&mut self, word: &str) -> Result<()> {
        self.delete_bookmark_with_score(word)
    }
}

/// Executes a compiled selection against stored bookmarks
pub trait BookmarkQuery {
    fn query_bookmarks(&self, selection: &CompiledSelection) -> Result<Vec<BookmarkView>>;
}

impl<S: BookmarkQuery + ?Sized> BookmarkQuery for &S {
    fn query_bookmarks(&self, selection: &CompiledSelection) -> Result<Vec<BookmarkView>> {
        (**self).query_bookmarks(selection)
    }
}

impl<S: BookmarkQuery + ?Sized> BookmarkQuery for &mut S {
    fn query_bookmarks(&self, selection: &CompiledSelection) -> Result<Vec<BookmarkView>> {
        (**self).query_bookmarks(selection)
    }
}
