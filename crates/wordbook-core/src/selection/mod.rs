//! Bookmark selection: validate → compile → query → shuffle → merge

mod compiler;
mod condition;
mod engine;
mod merge;
mod shuffle;

pub use compiler::{BookmarkField, CompiledSelection, Direction, Filter, OrderKey, compile};
pub use condition::{
    ValidatedCondition, condition_from_json, parse_condition, parse_conditions, validate,
};
pub use engine::BookmarkSelectionEngine;
pub use merge::{MergeKey, merge};
pub use shuffle::group_shuffle;
