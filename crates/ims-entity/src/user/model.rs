//! User profile as returned by `/users/current`.

use serde::{Deserialize, Serialize};

use ims_core::types::UserId;

/// The logged-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Role name exactly as the API reports it.
    #[serde(default)]
    pub role: Option<String>,
}
