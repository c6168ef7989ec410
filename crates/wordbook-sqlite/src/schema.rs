use rusqlite::Connection;

/// Tables and the joined bookmark view.
///
/// Score rows are created and removed by the store inside the same transaction as their
/// bookmark; the cascade only covers deletes issued outside the store.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS Words (
        word TEXT PRIMARY KEY,
        meanings TEXT NOT NULL DEFAULT '[]'
    );

    CREATE TABLE IF NOT EXISTS Bookmark (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT NOT NULL UNIQUE,
        addedDate INTEGER NOT NULL,
        FOREIGN KEY (word) REFERENCES Words(word) ON DELETE RESTRICT
    );

    CREATE TABLE IF NOT EXISTS BookmarkQuizScore (
        word TEXT PRIMARY KEY,
        total INTEGER NOT NULL DEFAULT 0 CHECK (total >= 0),
        correct INTEGER NOT NULL DEFAULT 0 CHECK (correct >= 0),
        incorrect INTEGER NOT NULL DEFAULT 0 CHECK (incorrect >= 0),
        CHECK (total = correct + incorrect),
        FOREIGN KEY (word) REFERENCES Bookmark(word) ON DELETE CASCADE
    );

    CREATE VIEW IF NOT EXISTS view_Bookmark AS
    SELECT
        Bookmark.id,
        Bookmark.addedDate,
        Words.word,
        Words.meanings,
        BookmarkQuizScore.total AS quizTotal,
        BookmarkQuizScore.correct AS quizCorrect,
        BookmarkQuizScore.incorrect AS quizIncorrect,
        CASE
            WHEN BookmarkQuizScore.total = 0 THEN 0.0
            ELSE 100.0 * BookmarkQuizScore.incorrect / BookmarkQuizScore.total
        END AS quizIncorrectRate
    FROM Bookmark
    JOIN BookmarkQuizScore ON Bookmark.word = BookmarkQuizScore.word
    JOIN Words ON Bookmark.word = Words.word;
"#;

pub(crate) fn init(conn: &Connection, in_memory: bool) -> rusqlite::Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    if !in_memory {
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        tracing::debug!("journal mode: {mode}");
    }

    conn.execute_batch(SCHEMA)
}
