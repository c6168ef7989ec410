use std::fmt;

pub type Result<T> = std::result::Result<T, WordbookError>;

/// Which relation an integrity or duplicate-key error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Word,
    Bookmark,
    QuizScore,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Word => "word",
            Entity::Bookmark => "bookmark",
            Entity::QuizScore => "quiz score",
        };
        f.write_str(name)
    }
}

/// Malformed or self-contradictory selection condition
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConditionError {
    #[error("{first} and {second} are mutually exclusive")]
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },

    #[error("Invalid field type '{field}': expected {expected}, but {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unknown condition field '{0}'")]
    UnknownField(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Selection condition must be an object, but {0}")]
    NotAnObject(&'static str),
}

/// Errors raised by a `DictionaryLookup`
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No dictionary entry for '{0}'")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Persisted meanings that no longer parse
#[derive(Debug, thiserror::Error)]
#[error("corrupt meanings of word '{word}': {source}")]
pub struct CorruptData {
    pub word: String,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, thiserror::Error)]
pub enum WordbookError {
    #[error("Invalid selection condition: {0}")]
    Condition(#[from] ConditionError),

    #[error("{entity} '{key}' already exists")]
    DuplicateKey { entity: Entity, key: String },

    #[error("Integrity violation on {entity} '{key}': {reason}")]
    Integrity {
        entity: Entity,
        key: String,
        reason: String,
    },

    #[error("Storage failure while {operation}: {source}")]
    Storage {
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Dictionary lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

impl WordbookError {
    pub fn storage(
        operation: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        WordbookError::Storage {
            operation: operation.into(),
            source: source.into(),
        }
    }

    pub fn corrupt_meanings(word: &str, source: serde_json::Error) -> Self {
        WordbookError::storage(
            format!("decoding meanings of '{word}'"),
            CorruptData {
                word: word.to_string(),
                source,
            },
        )
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, WordbookError::Integrity { .. })
    }
}
