use rusqlite::{OptionalExtension, params};
use wordbook_core::{Entity, Result, WordStore, WordbookError};
use wordbook_types::{Meaning, Word};

use crate::SqliteWordbook;
use crate::error::SqlResultExt;

pub(crate) fn encode_meanings(meanings: &[Meaning]) -> Result<String> {
    serde_json::to_string(meanings).map_err(|e| WordbookError::storage("encoding meanings", e))
}

pub(crate) fn decode_meanings(word: &str, raw: &str) -> Result<Vec<Meaning>> {
    serde_json::from_str(raw).map_err(|e| WordbookError::corrupt_meanings(word, e))
}

impl WordStore for SqliteWordbook {
    fn add_word(&mut self, word: &str, meanings: &[Meaning]) -> Result<()> {
        let encoded = encode_meanings(meanings)?;
        self.conn
            .execute(
                "INSERT INTO Words (word, meanings) VALUES (?1, ?2)",
                params![word, encoded],
            )
            .or_constraint(Entity::Word, word, "adding word")?;
        tracing::debug!("added word '{word}'");
        Ok(())
    }

    fn edit_word(&mut self, word: &str, meanings: &[Meaning]) -> Result<bool> {
        let encoded = encode_meanings(meanings)?;
        let changed = self
            .conn
            .execute(
                "UPDATE Words SET meanings = ?2 WHERE word = ?1",
                params![word, encoded],
            )
            .or_storage("editing word")?;
        Ok(changed > 0)
    }

    fn get_word(&self, word: &str) -> Result<Option<Word>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT meanings FROM Words WHERE word = ?1",
                [word],
                |row| row.get(0),
            )
            .optional()
            .or_storage("reading word")?;

        raw.map(|raw| -> Result<Word> {
            Ok(Word {
                word: word.to_string(),
                meanings: decode_meanings(word, &raw)?,
            })
        })
        .transpose()
    }

    fn delete_word(&mut self, word: &str) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM Words WHERE word = ?1", [word])
            .or_constraint(Entity::Word, word, "deleting word")?;
        if removed > 0 {
            tracing::debug!("deleted word '{word}'");
        }
        Ok(())
    }

    fn word_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM Words", [], |row| row.get(0))
            .or_storage("counting words")?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn list_words(&self) -> Result<Vec<Word>> {
        let mut stmt = self
            .conn
            .prepare("SELECT word, meanings FROM Words ORDER BY word")
            .or_storage("listing words")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .or_storage("listing words")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .or_storage("listing words")?;

        rows.into_iter()
            .map(|(word, raw)| -> Result<Word> {
                let meanings = decode_meanings(&word, &raw)?;
                Ok(Word { word, meanings })
            })
            .collect()
    }
}
