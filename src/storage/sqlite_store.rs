use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use super::KeyValueStore;
use crate::error::{Result, ScrapbookError};

pub const SCRAPBOOK_DIR: &str = ".scrapbook";
const SCRAPBOOK_DB: &str = "scrapbook.db";

/// Key-value store backed by a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
    path: PathBuf,
}

impl SqliteStore {
    /// Initialize a new scrapbook project
    pub fn init(root: &Path) -> Result<Self> {
        let scrapbook_dir = root.join(SCRAPBOOK_DIR);

        if scrapbook_dir.exists() {
            return Err(ScrapbookError::AlreadyInitialized);
        }

        fs::create_dir_all(&scrapbook_dir)?;
        Self::open_path(scrapbook_dir.join(SCRAPBOOK_DB))
    }

    /// Open an existing scrapbook project
    pub fn open(root: &Path) -> Result<Self> {
        let path = root.join(SCRAPBOOK_DIR).join(SCRAPBOOK_DB);

        if !path.exists() {
            return Err(ScrapbookError::NotInitialized);
        }

        Self::open_path(path)
    }

    fn open_path(path: PathBuf) -> Result<Self> {
        let conn = Connection::open(&path)?;
        let store = Self { conn, path };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Get the .scrapbook directory path
    pub fn scrapbook_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

impl KeyValueStore for SqliteStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        debug!(key, bytes = value.len(), "saved store value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_database() {
        let tmp = TempDir::new().unwrap();
        let store = SqliteStore::init(tmp.path()).unwrap();
        assert!(tmp.path().join(".scrapbook/scrapbook.db").exists());
        assert_eq!(store.scrapbook_dir(), tmp.path().join(".scrapbook"));
    }

    #[test]
    fn test_init_twice_fails() {
        let tmp = TempDir::new().unwrap();
        SqliteStore::init(tmp.path()).unwrap();
        let err = SqliteStore::init(tmp.path()).err().unwrap();
        assert!(matches!(err, ScrapbookError::AlreadyInitialized));
    }

    #[test]
    fn test_open_without_init_fails() {
        let tmp = TempDir::new().unwrap();
        let err = SqliteStore::open(tmp.path()).err().unwrap();
        assert!(matches!(err, ScrapbookError::NotInitialized));
    }

    #[test]
    fn test_values_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        {
            let mut store = SqliteStore::init(tmp.path()).unwrap();
            store.save("theme", "light").unwrap();
            store.save("theme", "dark").unwrap();
            store.save("notes", r#"["hi"]"#).unwrap();
        }
        let store = SqliteStore::open(tmp.path()).unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.load("notes").unwrap().as_deref(), Some(r#"["hi"]"#));
        assert_eq!(store.load("timeline").unwrap(), None);
    }
}
