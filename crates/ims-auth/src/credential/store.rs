//! Credential store over local storage.

use std::sync::Arc;

use tracing::{debug, warn};

use ims_core::config::auth::CredentialConfig;
use ims_core::result::AppResult;
use ims_core::traits::storage::LocalStorage;

use super::cipher::CredentialCipher;

/// Saves and loads named secrets in encrypted form.
///
/// "Present but undecryptable" and "absent" are indistinguishable to
/// callers: both load as `None`.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    /// Shared local storage.
    storage: Arc<dyn LocalStorage>,
    /// Fixed-key cipher.
    cipher: Arc<CredentialCipher>,
}

impl CredentialStore {
    /// Creates a credential store from configuration.
    pub fn new(storage: Arc<dyn LocalStorage>, config: &CredentialConfig) -> Self {
        Self::with_cipher(storage, CredentialCipher::new(config))
    }

    /// Creates a credential store with an explicit cipher.
    pub fn with_cipher(storage: Arc<dyn LocalStorage>, cipher: CredentialCipher) -> Self {
        Self {
            storage,
            cipher: Arc::new(cipher),
        }
    }

    /// Encrypts `plaintext` and writes it under `key`.
    pub fn save(&self, key: &str, plaintext: &str) -> AppResult<()> {
        let sealed = self.cipher.encrypt(plaintext)?;
        self.storage.set_item(key, &sealed)?;
        debug!(key, "Saved credential");
        Ok(())
    }

    /// Reads and decrypts the value under `key`.
    pub fn load(&self, key: &str) -> Option<String> {
        let sealed = match self.storage.get_item(key) {
            Ok(Some(sealed)) if !sealed.is_empty() => sealed,
            Ok(_) => return None,
            Err(e) => {
                warn!(key, error = %e, "Credential read failed; treating as absent");
                return None;
            }
        };

        let plain = self.cipher.decrypt(&sealed);
        if plain.is_none() {
            debug!(key, "Stored credential could not be decrypted");
        }
        plain
    }

    /// Removes every listed key.
    pub fn clear(&self, keys: &[&str]) -> AppResult<()> {
        for key in keys {
            self.storage.remove_item(key)?;
        }
        Ok(())
    }

    /// The underlying storage handle.
    pub fn storage(&self) -> &Arc<dyn LocalStorage> {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ims_storage::memory::MemoryStorage;

    fn store() -> (CredentialStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = CredentialStore::with_cipher(
            Arc::new(storage.clone()),
            CredentialCipher::from_passphrase("4GI_IMS", "salt", 8),
        );
        (store, storage)
    }

    #[test]
    fn test_save_then_load_returns_value() {
        let (store, raw) = store();
        for value in ["a", "ADMIN", "eyJ0eXAiOiJKV1QifQ.e30.sig", " spaced value ~!@#$%^&*() "] {
            store.save("token", value).unwrap();
            assert_eq!(store.load("token").as_deref(), Some(value));
            assert_ne!(raw.get_item("token").unwrap().as_deref(), Some(value));
        }
    }

    #[test]
    fn test_absent_and_corrupt_are_both_none() {
        let (store, raw) = store();
        assert_eq!(store.load("role"), None);
        raw.set_item("role", "ADMIN").unwrap();
        assert_eq!(store.load("role"), None);
        raw.set_item("role", "").unwrap();
        assert_eq!(store.load("role"), None);
    }

    #[test]
    fn test_clear_removes_listed_keys_only() {
        let (store, raw) = store();
        store.save("token", "t").unwrap();
        store.save("role", "MANAGER").unwrap();
        raw.set_item("sidebar-collapsed", "true").unwrap();

        store.clear(&["token", "role"]).unwrap();
        assert_eq!(store.load("token"), None);
        assert_eq!(store.load("role"), None);
        assert!(raw.contains("sidebar-collapsed").unwrap());

        store.clear(&["token", "role"]).unwrap();
    }
}
