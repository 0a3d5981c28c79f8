//! # ims-core
//!
//! Core crate for the IMS client. Contains the storage and remote
//! collection traits, configuration schemas, typed identifiers,
//! pagination/search types, transient notices, and the unified error system.
//!
//! This crate has **no** internal dependencies on other IMS crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
