//! Core traits defined in `ims-core` and implemented by other crates.

pub mod remote;
pub mod storage;

pub use remote::RemoteCollection;
pub use storage::LocalStorage;
