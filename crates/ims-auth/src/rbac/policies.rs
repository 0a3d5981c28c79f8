//! Role-to-permission mapping definitions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use ims_entity::user::Role;

/// An action a view may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // Categories
    /// Create, rename, delete categories.
    CategoryManage,
    /// Drag categories into a new order.
    CategoryReorder,

    // Products
    /// Create, edit, delete products.
    ProductManage,
    /// Drag products into a new order.
    ProductReorder,

    // Suppliers
    /// Create, edit, delete suppliers.
    SupplierManage,

    // Transactions
    /// Record a purchase.
    TransactionPurchase,
    /// Record a sale.
    TransactionSell,
    /// Browse transaction history.
    TransactionView,
    /// Change a transaction's status.
    TransactionUpdateStatus,
}

impl Permission {
    /// Every permission.
    pub const ALL: [Permission; 9] = [
        Permission::CategoryManage,
        Permission::CategoryReorder,
        Permission::ProductManage,
        Permission::ProductReorder,
        Permission::SupplierManage,
        Permission::TransactionPurchase,
        Permission::TransactionSell,
        Permission::TransactionView,
        Permission::TransactionUpdateStatus,
    ];
}

/// Defines which permissions each principal holds.
///
/// Principals without a recognised role get the same set as managers:
/// the client has nothing lower than "authenticated".
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    /// ADMIN's permissions.
    admin: HashSet<Permission>,
    /// Everyone else's permissions.
    staff: HashSet<Permission>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let admin = Permission::ALL.into_iter().collect();

        let staff = [
            Permission::TransactionPurchase,
            Permission::TransactionSell,
            Permission::TransactionView,
        ]
        .into_iter()
        .collect();

        Self { admin, staff }
    }

    /// Returns the set of permissions for the given role.
    pub fn permissions_for_role(&self, role: Option<Role>) -> &HashSet<Permission> {
        match role {
            Some(Role::Admin) => &self.admin,
            Some(Role::Manager) | None => &self.staff,
        }
    }

    /// Checks whether the given role has the specified permission.
    pub fn has_permission(&self, role: Option<Role>, permission: Permission) -> bool {
        self.permissions_for_role(role).contains(&permission)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
