//! Encrypted credential persistence.

pub mod cipher;
pub mod store;

pub use cipher::CredentialCipher;
pub use store::CredentialStore;
