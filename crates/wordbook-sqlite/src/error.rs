use std::ffi::c_int;

use rusqlite::ErrorCode;
use rusqlite::ffi::{
    SQLITE_CONSTRAINT_FOREIGNKEY, SQLITE_CONSTRAINT_PRIMARYKEY, SQLITE_CONSTRAINT_UNIQUE,
};
use wordbook_core::{Entity, Result, WordbookError};

/// Wrap SQLite failures with the operation that was running
pub(crate) trait SqlResultExt<T> {
    fn or_storage(self, operation: &str) -> Result<T>;

    /// Like `or_storage`, but constraint violations on `key` become typed errors
    fn or_constraint(self, entity: Entity, key: &str, operation: &str) -> Result<T>;
}

impl<T> SqlResultExt<T> for rusqlite::Result<T> {
    fn or_storage(self, operation: &str) -> Result<T> {
        self.map_err(|e| WordbookError::storage(operation, e))
    }

    fn or_constraint(self, entity: Entity, key: &str, operation: &str) -> Result<T> {
        self.map_err(|e| match constraint_code(&e) {
            Some(SQLITE_CONSTRAINT_PRIMARYKEY | SQLITE_CONSTRAINT_UNIQUE) => {
                WordbookError::DuplicateKey {
                    entity,
                    key: key.to_string(),
                }
            }
            Some(SQLITE_CONSTRAINT_FOREIGNKEY) => WordbookError::Integrity {
                entity,
                key: key.to_string(),
                reason: integrity_reason(entity).to_string(),
            },
            _ => WordbookError::storage(operation, e),
        })
    }
}

fn constraint_code(err: &rusqlite::Error) -> Option<c_int> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            Some(e.extended_code)
        }
        _ => None,
    }
}

fn integrity_reason(entity: Entity) -> &'static str {
    match entity {
        Entity::Word => "word is still bookmarked",
        Entity::Bookmark => "word does not exist",
        Entity::QuizScore => "word is not bookmarked",
    }
}
