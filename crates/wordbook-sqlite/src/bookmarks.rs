use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use wordbook_core::selection::CompiledSelection;
use wordbook_core::{BookmarkQuery, BookmarkStore, Entity, Result, WordbookError};
use wordbook_types::{Bookmark, BookmarkView, QuizScore};

use crate::SqliteWordbook;
use crate::error::SqlResultExt;
use crate::query::{BOOKMARK_COLUMNS, select_bookmarks};
use crate::words::decode_meanings;

/// View row with meanings still encoded
struct RawBookmark {
    id: i64,
    word: String,
    meanings: String,
    added_date: i64,
    score: QuizScore,
}

impl RawBookmark {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let word: String = row.get("word")?;
        Ok(Self {
            id: row.get("id")?,
            meanings: row.get("meanings")?,
            added_date: row.get("addedDate")?,
            score: QuizScore {
                word: word.clone(),
                total: row.get("quizTotal")?,
                correct: row.get("quizCorrect")?,
                incorrect: row.get("quizIncorrect")?,
            },
            word,
        })
    }

    fn decode(self) -> Result<BookmarkView> {
        let meanings = decode_meanings(&self.word, &self.meanings)?;
        let bookmark = Bookmark {
            id: self.id,
            word: self.word,
            added_date: self.added_date,
        };
        Ok(BookmarkView::new(bookmark, meanings, &self.score))
    }
}

fn score_from_row(row: &Row<'_>) -> rusqlite::Result<QuizScore> {
    Ok(QuizScore {
        word: row.get("word")?,
        total: row.get("total")?,
        correct: row.get("correct")?,
        incorrect: row.get("incorrect")?,
    })
}

/// Score with `total` derived from the counters; all three must fit in `u32`
fn checked_score(word: &str, correct: u32, incorrect: u32) -> Result<QuizScore> {
    let total = correct
        .checked_add(incorrect)
        .ok_or_else(|| score_overflow(word))?;
    Ok(QuizScore {
        word: word.to_string(),
        total,
        correct,
        incorrect,
    })
}

fn score_overflow(word: &str) -> WordbookError {
    WordbookError::Integrity {
        entity: Entity::QuizScore,
        key: word.to_string(),
        reason: format!("counters would exceed {}", u32::MAX),
    }
}

fn write_score(conn: &Connection, score: &QuizScore) -> rusqlite::Result<usize> {
    conn.execute(
        "UPDATE BookmarkQuizScore SET total = ?2, correct = ?3, incorrect = ?4 WHERE word = ?1",
        params![score.word, score.total, score.correct, score.incorrect],
    )
}

impl SqliteWordbook {
    /// Bookmark row without the joined word and score
    pub fn get_raw_bookmark(&self, word: &str) -> Result<Option<Bookmark>> {
        self.conn
            .query_row(
                "SELECT id, word, addedDate FROM Bookmark WHERE word = ?1",
                [word],
                |row| {
                    Ok(Bookmark {
                        id: row.get(0)?,
                        word: row.get(1)?,
                        added_date: row.get(2)?,
                    })
                },
            )
            .optional()
            .or_storage("reading bookmark")
    }
}

impl BookmarkStore for SqliteWordbook {
    fn create_bookmark_with_score(&mut self, word: &str, added_date: i64) -> Result<()> {
        let tx = self.conn.transaction().or_storage("starting transaction")?;
        tx.execute(
            "INSERT INTO Bookmark (word, addedDate) VALUES (?1, ?2)",
            params![word, added_date],
        )
        .or_constraint(Entity::Bookmark, word, "adding bookmark")?;
        tx.execute("INSERT INTO BookmarkQuizScore (word) VALUES (?1)", [word])
            .or_constraint(Entity::QuizScore, word, "adding quiz score")?;
        tx.commit().or_storage("committing bookmark")?;

        tracing::debug!("bookmarked '{word}'");
        Ok(())
    }

    fn delete_bookmark_with_score(&mut self, word: &str) -> Result<()> {
        let tx = self.conn.transaction().or_storage("starting transaction")?;
        tx.execute("DELETE FROM BookmarkQuizScore WHERE word = ?1", [word])
            .or_storage("deleting quiz score")?;
        let removed = tx
            .execute("DELETE FROM Bookmark WHERE word = ?1", [word])
            .or_storage("deleting bookmark")?;
        tx.commit().or_storage("committing bookmark removal")?;

        if removed > 0 {
            tracing::debug!("removed bookmark '{word}'");
        }
        Ok(())
    }

    fn get_bookmark(&self, word: &str) -> Result<Option<BookmarkView>> {
        let sql = format!("SELECT {BOOKMARK_COLUMNS} FROM view_Bookmark WHERE word = ?1");
        self.conn
            .query_row(&sql, [word], RawBookmark::from_row)
            .optional()
            .or_storage("reading bookmark")?
            .map(RawBookmark::decode)
            .transpose()
    }

    fn get_quiz_score(&self, word: &str) -> Result<Option<QuizScore>> {
        self.conn
            .query_row(
                "SELECT word, total, correct, incorrect FROM BookmarkQuizScore WHERE word = ?1",
                [word],
                score_from_row,
            )
            .optional()
            .or_storage("reading quiz score")
    }

    fn increase_quiz_score(&mut self, word: &str, correct: u32, incorrect: u32) -> Result<bool> {
        let tx = self.conn.transaction().or_storage("starting transaction")?;
        let Some(current) = tx
            .query_row(
                "SELECT word, total, correct, incorrect FROM BookmarkQuizScore WHERE word = ?1",
                [word],
                score_from_row,
            )
            .optional()
            .or_storage("reading quiz score")?
        else {
            return Ok(false);
        };

        let score = match (
            current.correct.checked_add(correct),
            current.incorrect.checked_add(incorrect),
        ) {
            (Some(correct), Some(incorrect)) => checked_score(word, correct, incorrect)?,
            _ => return Err(score_overflow(word)),
        };
        write_score(&tx, &score).or_storage("increasing quiz score")?;
        tx.commit().or_storage("committing quiz score")?;
        Ok(true)
    }

    fn reset_quiz_score(&mut self, word: &str, correct: u32, incorrect: u32) -> Result<bool> {
        let score = checked_score(word, correct, incorrect)?;
        let changed = write_score(&self.conn, &score).or_storage("resetting quiz score")?;
        Ok(changed > 0)
    }

    fn bookmark_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT count(*) FROM Bookmark", [], |row| row.get(0))
            .or_storage("counting bookmarks")?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn clear_bookmarks(&mut self) -> Result<()> {
        let tx = self.conn.transaction().or_storage("starting transaction")?;
        tx.execute("DELETE FROM BookmarkQuizScore", [])
            .or_storage("clearing quiz scores")?;
        let removed = tx
            .execute("DELETE FROM Bookmark", [])
            .or_storage("clearing bookmarks")?;
        tx.commit().or_storage("committing clear")?;

        tracing::info!("cleared {removed} bookmarks");
        Ok(())
    }
}

impl BookmarkQuery for SqliteWordbook {
    fn query_bookmarks(&self, selection: &CompiledSelection) -> Result<Vec<BookmarkView>> {
        let query = select_bookmarks(selection);
        tracing::trace!("{} {:?}", query.sql, query.params);

        let mut stmt = self.conn.prepare(&query.sql).or_storage("preparing selection")?;
        let rows = stmt
            .query_map(params_from_iter(query.params.iter()), RawBookmark::from_row)
            .or_storage("running selection")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .or_storage("reading selection")?;

        rows.into_iter().map(RawBookmark::decode).collect()
    }
}
