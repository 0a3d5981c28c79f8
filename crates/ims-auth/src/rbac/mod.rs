//! Role-based permission checks for list-mutating actions.

pub mod enforcer;
pub mod policies;

pub use enforcer::RbacEnforcer;
pub use policies::{Permission, RbacPolicies};
