use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::Result;

/// In-memory store with write counting, for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a value without counting it as a write.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `save` calls since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("notes").unwrap(), None);
    }

    #[test]
    fn test_save_overwrites_and_counts() {
        let mut store = MemoryStore::new();
        store.save("theme", "light").unwrap();
        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_with_value_is_not_a_write() {
        let store = MemoryStore::new().with_value("notes", "[]");
        assert_eq!(store.get("notes"), Some("[]"));
        assert_eq!(store.writes(), 0);
    }
}
