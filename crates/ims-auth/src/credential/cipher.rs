//! AES-256-GCM obfuscation with a key derived from a static passphrase.
//!
//! The passphrase ships inside the client, so anyone with the binary can
//! decrypt what this produces. It keeps tokens out of plain sight in the
//! storage file and nothing more.

use std::fmt;

use aes_gcm::aead::{Aead, OsRng, rand_core::RngCore};
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use ims_core::config::auth::CredentialConfig;
use ims_core::error::AppError;

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Encrypts and decrypts credential values with one fixed key.
#[derive(Clone)]
pub struct CredentialCipher {
    /// Derived AES-256 key.
    key: [u8; 32],
}

impl CredentialCipher {
    /// Derive the key from the configured passphrase and salt.
    pub fn new(config: &CredentialConfig) -> Self {
        Self::from_passphrase(&config.passphrase, &config.salt, config.kdf_iterations)
    }

    /// Derive the key from explicit inputs.
    pub fn from_passphrase(passphrase: &str, salt: &str, iterations: u32) -> Self {
        let mut key = [0u8; 32];
        pbkdf2_hmac::<Sha256>(
            passphrase.as_bytes(),
            salt.as_bytes(),
            iterations.max(1),
            &mut key,
        );
        Self { key }
    }

    /// Encrypt `plaintext` into base64 of `nonce || ciphertext || tag`.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, AppError> {
        let cipher = Aes256Gcm::new_from_slice(&self.key)
            .map_err(|e| AppError::crypto(format!("Invalid credential key: {e}")))?;

        let mut iv = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut iv);
        let sealed = cipher
            .encrypt(Nonce::from_slice(&iv), plaintext.as_bytes())
            .map_err(|e| AppError::crypto(format!("Credential encryption failed: {e}")))?;

        let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&sealed);
        Ok(B64.encode(out))
    }

    /// Decrypt a value produced by [`encrypt`](Self::encrypt).
    ///
    /// Any malformed, truncated, tampered, foreign-key, or non-UTF-8 input
    /// yields `None`.
    pub fn decrypt(&self, encoded: &str) -> Option<String> {
        let raw = B64.decode(encoded.trim()).ok()?;
        if raw.len() < NONCE_LEN + TAG_LEN {
            return None;
        }
        let (iv, sealed) = raw.split_at(NONCE_LEN);
        let cipher = Aes256Gcm::new_from_slice(&self.key).ok()?;
        let opened = cipher.decrypt(Nonce::from_slice(iv), sealed).ok()?;
        String::from_utf8(opened).ok()
    }
}

impl fmt::Debug for CredentialCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialCipher").finish_non_exhaustive()
    }
}
