use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One translation of a word, as returned by a dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub from: String,
    pub from_type: String,
    pub to: String,
    /// Preferred meaning when building quiz choices
    #[serde(rename = "star", default)]
    pub starred: bool,
}

impl Meaning {
    pub fn new(from: impl Into<String>, from_type: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            from_type: from_type.into(),
            to: to.into(),
            starred: false,
        }
    }

    pub fn starred(mut self) -> Self {
        self.starred = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub word: String,
    /// Unix timestamp (seconds)
    pub added_date: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub word: String,
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
}

impl QuizScore {
    pub fn zero(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            total: 0,
            correct: 0,
            incorrect: 0,
        }
    }

    pub fn incorrect_rate(&self) -> f64 {
        incorrect_rate(self.total, self.incorrect)
    }
}

/// `100 * incorrect / total`, 0 when nothing was asked yet
pub fn incorrect_rate(total: u32, incorrect: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * f64::from(incorrect) / f64::from(total)
    }
}

/// Bookmark joined with its word and quiz score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkView {
    pub id: i64,
    pub word: String,
    pub meanings: Vec<Meaning>,
    pub added_date: i64,
    pub quiz_total: u32,
    pub quiz_correct: u32,
    pub quiz_incorrect: u32,
    pub quiz_incorrect_rate: f64,
}

impl BookmarkView {
    pub fn new(bookmark: Bookmark, meanings: Vec<Meaning>, score: &QuizScore) -> Self {
        Self {
            id: bookmark.id,
            word: bookmark.word,
            meanings,
            added_date: bookmark.added_date,
            quiz_total: score.total,
            quiz_correct: score.correct,
            quiz_incorrect: score.incorrect,
            quiz_incorrect_rate: score.incorrect_rate(),
        }
    }
}

/// Declarative selection over bookmarks.
///
/// Every field is optional; absent means "no constraint". Pairs of `low*`/`high*` ordering
/// flags and `oldest`/`latest` are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionCondition {
    /// Least quizzed first
    pub low_quiz_frequency: Option<bool>,
    /// Most quizzed first
    pub high_quiz_frequency: Option<bool>,

    /// Lowest incorrect rate first
    pub low_quiz_incorrect: Option<bool>,
    /// Highest incorrect rate first
    pub high_quiz_incorrect: Option<bool>,

    /// Minimum incorrect rate (0-100)
    pub low_incorrect_rate_limit: Option<f64>,
    /// Maximum incorrect rate (0-100)
    pub high_incorrect_rate_limit: Option<f64>,

    /// Minimum number of times quizzed
    pub low_frequency_limit: Option<u32>,
    /// Maximum number of times quizzed
    pub high_frequency_limit: Option<u32>,

    pub offset: Option<usize>,
    pub limit: Option<usize>,
    pub shuffle: Option<bool>,
    pub shuffle_group_size: Option<usize>,

    /// Oldest bookmark first
    pub oldest: Option<bool>,
    /// Newest bookmark first
    pub latest: Option<bool>,
}

impl SelectionCondition {
    pub fn wants_shuffle(&self) -> bool {
        self.shuffle.unwrap_or(false)
    }
}

/// How results of several conditions are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeOrder {
    #[default]
    Sequence,
    Interleave,
}

impl MergeOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeOrder::Sequence => "sequence",
            MergeOrder::Interleave => "interleave",
        }
    }
}

impl fmt::Display for MergeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergeOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequence" => Ok(MergeOrder::Sequence),
            "interleave" => Ok(MergeOrder::Interleave),
            other => Err(format!("unknown merge order '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub order: MergeOrder,
}

impl SelectOption {
    pub fn sequence() -> Self {
        Self {
            order: MergeOrder::Sequence,
        }
    }

    pub fn interleave() -> Self {
        Self {
            order: MergeOrder::Interleave,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incorrect_rate_is_zero_without_attempts() {
        assert_eq!(incorrect_rate(0, 0), 0.0);
        assert_eq!(incorrect_rate(4, 1), 25.0);
        assert_eq!(incorrect_rate(3, 1), 100.0 * 1.0 / 3.0);
    }

    #[test]
    fn meaning_uses_persisted_field_names() {
        let meaning = Meaning::new("apple", "n", "사과").starred();
        let json = serde_json::to_value(&meaning).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"from": "apple", "fromType": "n", "to": "사과", "star": true})
        );

        let parsed: Meaning =
            serde_json::from_str(r#"{"from":"a","fromType":"n","to":"b"}"#).unwrap();
        assert!(!parsed.starred);
    }

    #[test]
    fn merge_order_parses_from_cli_text() {
        assert_eq!("interleave".parse::<MergeOrder>(), Ok(MergeOrder::Interleave));
        assert_eq!("sequence".parse::<MergeOrder>(), Ok(MergeOrder::Sequence));
        assert!("random".parse::<MergeOrder>().is_err());
    }
}
