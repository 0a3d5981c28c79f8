//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles the client distinguishes.
///
/// The API may report other role names; those have no variant here and
/// are treated as the lowest privilege (`Option<Role>::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full administrator.
    Admin,
    /// Store manager: purchases, sales, and transaction history.
    Manager,
}

impl Role {
    /// Map a stored role string to a role, `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as the API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ims_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "MANAGER" => Ok(Self::Manager),
            _ => Err(ims_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: ADMIN, MANAGER"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("manager".parse::<Role>().unwrap(), Role::Manager);
        assert!("SUPERVISOR".parse::<Role>().is_err());
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("cashier"), None);
        assert_eq!(Role::parse(" Admin "), Some(Role::Admin));
    }

    #[test]
    fn test_serde_uses_api_names() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"MANAGER\"");
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert!(role.is_admin());
    }
}
