//! Authentication and role status with no cached state.
//!
//! Every accessor re-reads the credential store, so a login or logout in
//! one part of the client is visible everywhere else immediately.

use tracing::info;

use ims_core::result::AppResult;
use ims_entity::user::Role;
use ims_storage::keys;

use crate::credential::CredentialStore;

/// A point-in-time view of the stored credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token, `None` when absent, empty, or undecryptable.
    pub token: Option<String>,
    /// Known role, `None` for absent or unrecognised role names.
    pub role: Option<Role>,
}

impl Session {
    /// Build a session from raw values.
    pub fn new(token: Option<&str>, role: Option<Role>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(String::from),
            role,
        }
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the role is ADMIN.
    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(|r| r.is_admin())
    }
}

/// Reads session status from the credential store on every call.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Encrypted credential persistence.
    store: CredentialStore,
}

impl SessionState {
    /// Creates a session state over the given store.
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    /// True iff a non-empty token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The stored bearer token.
    pub fn token(&self) -> Option<String> {
        self.store.load(keys::TOKEN).filter(|t| !t.is_empty())
    }

    /// The stored role string, verbatim.
    pub fn raw_role(&self) -> Option<String> {
        self.store.load(keys::ROLE)
    }

    /// The stored role, `None` when absent or unknown.
    pub fn current_role(&self) -> Option<Role> {
        self.raw_role().as_deref().and_then(Role::parse)
    }

    /// Whether the stored role is ADMIN.
    pub fn is_admin(&self) -> bool {
        self.current_role().is_some_and(|r| r.is_admin())
    }

    /// Read both credentials into one value.
    pub fn snapshot(&self) -> Session {
        Session::new(self.token().as_deref(), self.current_role())
    }

    /// Persist a freshly issued token and role.
    ///
    /// The two writes are independent; a reader between them may briefly
    /// see the new token with the previous role.
    pub fn establish(&self, token: &str, role: &str) -> AppResult<()> {
        self.store.save(keys::TOKEN, token)?;
        self.store.save(keys::ROLE, role)?;
        info!(role, "Session established");
        Ok(())
    }

    /// Forget both credentials. Safe to call repeatedly.
    pub fn logout(&self) -> AppResult<()> {
        self.store.clear(&keys::CREDENTIALS)?;
        info!("Session cleared");
        Ok(())
    }

    /// The underlying credential store.
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }
}
