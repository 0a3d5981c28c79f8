//! Key-value persistence trait standing in for browser local storage.

use crate::result::AppResult;

/// Trait for local key-value backends (in-memory or file-backed).
///
/// All values are strings. Reads and writes are atomic per key; there is
/// no multi-key transaction. Implementations are shared process-wide, so
/// a write through one handle is visible to every other reader at once.
pub trait LocalStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Store a value, replacing any previous one.
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> AppResult<()>;

    /// List all stored keys.
    fn keys(&self) -> AppResult<Vec<String>>;

    /// Remove every entry.
    fn clear(&self) -> AppResult<()>;

    /// Check whether a key exists.
    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.get_item(key)?.is_some())
    }
}
