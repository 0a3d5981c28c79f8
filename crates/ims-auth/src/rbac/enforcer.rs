//! RBAC enforcement: checks whether the current session may act.

use ims_core::error::AppError;
use ims_entity::user::Role;

use super::policies::{Permission, RbacPolicies};
use crate::session::SessionState;

/// Enforces role-based permissions for list-mutating actions.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Creates an enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// Checks whether the given role has the required permission.
    ///
    /// Returns `Ok(())` if allowed, or an authorization error if denied.
    pub fn require_permission(
        &self,
        role: Option<Role>,
        permission: Permission,
    ) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            let who = role.map_or("this account", |r| r.as_str());
            Err(AppError::authorization(format!(
                "Role '{who}' does not have permission '{permission:?}'"
            )))
        }
    }

    /// Checks the permission against the role stored right now.
    ///
    /// An unauthenticated session is rejected before the role is consulted.
    pub fn require_for_session(
        &self,
        state: &SessionState,
        permission: Permission,
    ) -> Result<(), AppError> {
        if !state.is_authenticated() {
            return Err(AppError::authentication("Not logged in"));
        }
        self.require_permission(state.current_role(), permission)
    }

    /// Checks whether the role has the required permission (returns bool).
    pub fn has_permission(&self, role: Option<Role>, permission: Permission) -> bool {
        self.policies.has_permission(role, permission)
    }

    /// Returns a reference to the underlying policies.
    pub fn policies(&self) -> &RbacPolicies {
        &self.policies
    }
}

impl Default for RbacEnforcer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ims_core::error::ErrorKind;

    #[test]
    fn test_require_permission() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer
            .require_permission(Some(Role::Admin), Permission::CategoryReorder)
            .is_ok());
        let err = enforcer
            .require_permission(Some(Role::Manager), Permission::CategoryReorder)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert!(err.message.contains("MANAGER"));
    }
}
