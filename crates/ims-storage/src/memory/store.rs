//! In-memory storage implementation using the dashmap crate.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use ims_core::result::AppResult;
use ims_core::traits::storage::LocalStorage;

/// In-memory storage provider.
///
/// Clones share the same map, so every handle observes every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    /// The underlying concurrent map.
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }

    fn clear(&self) -> AppResult<()> {
        let count = self.entries.len();
        self.entries.clear();
        debug!(count, "Cleared in-memory storage");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let storage = MemoryStorage::new();
        storage.set_item("key1", "value1").unwrap();
        assert_eq!(storage.get_item("key1").unwrap(), Some("value1".to_string()));
        assert!(storage.contains("key1").unwrap());
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let storage = MemoryStorage::new();
        storage.remove_item("nothing").unwrap();
        storage.set_item("key2", "value2").unwrap();
        storage.remove_item("key2").unwrap();
        assert_eq!(storage.get_item("key2").unwrap(), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set_item("shared", "yes").unwrap();
        assert_eq!(other.get_item("shared").unwrap().as_deref(), Some("yes"));
        other.clear().unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_keys_sorted() {
        let storage = MemoryStorage::new();
        storage.set_item("role", "r").unwrap();
        storage.set_item("token", "t").unwrap();
        storage.set_item("productViewMode", "grid").unwrap();
        assert_eq!(storage.keys().unwrap(), vec!["productViewMode", "role", "token"]);
    }
}
