pub mod types;

pub use types::{
    Bookmark, BookmarkView, Meaning, MergeOrder, QuizScore, SelectOption, SelectionCondition, Word,
    incorrect_rate,
};
