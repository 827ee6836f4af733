mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryStore;
pub use sqlite_store::{SqliteStore, SCRAPBOOK_DIR};

use crate::error::Result;

/// Logical keys the scrapbook persists under.
pub const NOTES_KEY: &str = "notes";
pub const PHOTOS_KEY: &str = "photos";
pub const TIMELINE_KEY: &str = "timeline";
pub const THEME_KEY: &str = "theme";

/// String-keyed, string-valued durable storage.
pub trait KeyValueStore {
    /// Return the last value saved under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key` unconditionally.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}
