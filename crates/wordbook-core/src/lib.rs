pub mod error;
pub mod lookup;
pub mod preprocess;
pub mod quiz;
pub mod selection;
pub mod store;

pub use error::{ConditionError, Entity, LookupError, Result, WordbookError};
pub use lookup::{DictionaryLookup, search_word};
pub use selection::BookmarkSelectionEngine;
pub use store::{BookmarkQuery, BookmarkStore, WordStore};
