//! # ims-storage
//!
//! Local persistence backends for the IMS client, standing in for the
//! browser's local storage. Supports two modes:
//!
//! - **memory**: process-local map using [dashmap](https://crates.io/crates/dashmap)
//! - **file**: a single JSON object on disk, rewritten on every change
//!
//! The provider is selected at runtime based on configuration.

#[cfg(feature = "file")]
pub mod file;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;

pub use provider::StorageManager;
