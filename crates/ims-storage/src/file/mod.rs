//! File-backed storage backend.

mod store;

pub use store::FileStorage;
