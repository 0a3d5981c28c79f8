//! Credential store configuration.

use serde::{Deserialize, Serialize};

/// Settings for the encrypted credential entries (`token`, `role`).
///
/// The passphrase ships with the client. Anything stored with it is
/// obfuscated against casual inspection, not protected: the remote API
/// remains the only real authorization boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialConfig {
    /// Static passphrase the symmetric key is derived from.
    #[serde(default = "default_passphrase")]
    pub passphrase: String,
    /// Fixed PBKDF2 salt.
    #[serde(default = "default_salt")]
    pub salt: String,
    /// PBKDF2-HMAC-SHA256 iteration count.
    #[serde(default = "default_iterations")]
    pub kdf_iterations: u32,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            passphrase: default_passphrase(),
            salt: default_salt(),
            kdf_iterations: default_iterations(),
        }
    }
}

fn default_passphrase() -> String {
    "4GI_IMS".to_string()
}

fn default_salt() -> String {
    "ims-credential-store".to_string()
}

fn default_iterations() -> u32 {
    10_000
}
