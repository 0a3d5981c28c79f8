//! Storage manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use ims_core::config::storage::StorageConfig;
use ims_core::error::AppError;
use ims_core::result::AppResult;
use ims_core::traits::storage::LocalStorage;

/// Storage manager that wraps the configured local storage provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StorageManager {
    /// The inner storage provider.
    inner: Arc<dyn LocalStorage>,
}

impl StorageManager {
    /// Create a new storage manager from configuration.
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        let inner: Arc<dyn LocalStorage> = match config.provider.as_str() {
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory local storage");
                Arc::new(crate::memory::MemoryStorage::new())
            }
            #[cfg(feature = "file")]
            "file" => {
                info!(path = %config.path, "Initializing file-backed local storage");
                Arc::new(crate::file::FileStorage::open(&config.path)?)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown storage provider: '{other}'. Supported: memory, file"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a storage manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn LocalStorage>) -> Self {
        Self { inner: provider }
    }

    /// Shared handle to the inner provider.
    pub fn provider(&self) -> Arc<dyn LocalStorage> {
        Arc::clone(&self.inner)
    }
}

impl LocalStorage for StorageManager {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.inner.remove_item(key)
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        self.inner.keys()
    }

    fn clear(&self) -> AppResult<()> {
        self.inner.clear()
    }
}
