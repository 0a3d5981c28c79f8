//! Local persistence configuration.

use serde::{Deserialize, Serialize};

/// Which key-value backend stands in for browser local storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Provider name: `"memory"` or `"file"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// JSON file used by the `file` provider.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            path: default_path(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_path() -> String {
    "data/local-storage.json".to_string()
}
