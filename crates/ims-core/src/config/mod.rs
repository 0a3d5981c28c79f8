//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field has a default so an empty file is valid.

pub mod api;
pub mod auth;
pub mod collection;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

pub use self::api::ApiConfig;
pub use self::auth::CredentialConfig;
pub use self::collection::{CollectionConfig, NoticeConfig, RollbackPolicy};
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Local persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Credential store settings.
    #[serde(default)]
    pub credentials: CredentialConfig,
    /// Ordered collection settings.
    #[serde(default)]
    pub collection: CollectionConfig,
    /// Transient message settings.
    #[serde(default)]
    pub notice: NoticeConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default`, an environment-specific overlay
    /// `config/{env}`, an optional explicit file, and environment variables
    /// prefixed with `IMS__`.
    pub fn load(env: &str, explicit: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }
        debug!(env, explicit = ?explicit, "Merging configuration sources");

        let config = builder
            .add_source(
                config::Environment::with_prefix("IMS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
