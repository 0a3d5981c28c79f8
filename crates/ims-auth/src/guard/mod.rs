//! Pre-navigation access control.

pub mod access;
pub mod route;

pub use access::{AccessGuard, GuardDecision, MANAGER_ALLOWED_PATHS};
pub use route::{ResolvedRoute, RouteDescriptor, RouteTable};
