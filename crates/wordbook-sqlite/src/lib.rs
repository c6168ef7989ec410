//! SQLite persistence for words, bookmarks and quiz scores

mod bookmarks;
mod error;
mod query;
mod schema;
mod words;

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use wordbook_core::{Result, WordbookError};

use crate::error::SqlResultExt;

pub use wordbook_config::database::IN_MEMORY;

/// Word, bookmark and quiz score tables behind one connection
pub struct SqliteWordbook {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteWordbook {
    /// Open (or create) the database at `path`; `:memory:` opens a private in-memory database
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str() == IN_MEMORY {
            return Self::open_in_memory();
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| WordbookError::storage(format!("creating {}", parent.display()), e))?;
        }

        let conn = Connection::open(path).or_storage("opening database")?;
        schema::init(&conn, false).or_storage("initializing schema")?;
        tracing::info!("opened wordbook at {}", path.display());

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().or_storage("opening in-memory database")?;
        schema::init(&conn, true).or_storage("initializing schema")?;
        tracing::debug!("opened in-memory wordbook");

        Ok(Self { conn, path: None })
    }

    /// Backing file, None for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| WordbookError::storage("closing database", e))
    }

    /// Close the connection and delete the backing file and its journal files
    pub fn drop_storage(self) -> Result<()> {
        let path = self.path.clone();
        self.close()?;

        let Some(path) = path else {
            return Ok(());
        };

        for suffix in ["", "-wal", "-shm"] {
            let mut file = path.clone().into_os_string();
            file.push(suffix);
            let file = PathBuf::from(file);
            if file.exists() {
                fs::remove_file(&file).map_err(|e| {
                    WordbookError::storage(format!("removing {}", file.display()), e)
                })?;
            }
        }
        tracing::info!("dropped wordbook at {}", path.display());

        Ok(())
    }
}
