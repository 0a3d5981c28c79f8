//! # ims-auth
//!
//! Client-side session and authorization core for the IMS client.
//!
//! ## Modules
//!
//! - `credential`: obfuscated persistence of the session token and role
//! - `session`: authentication and role status read fresh from the credential store
//! - `guard`: route table and the pre-navigation access decision
//! - `rbac`: which list-mutating actions each role may perform
//!
//! None of this is a security boundary. The remote API enforces
//! authorization; these checks only decide what the UI offers.

pub mod credential;
pub mod guard;
pub mod rbac;
pub mod session;

pub use credential::{CredentialCipher, CredentialStore};
pub use guard::{AccessGuard, GuardDecision, RouteDescriptor, RouteTable};
pub use rbac::{Permission, RbacEnforcer, RbacPolicies};
pub use session::{Session, SessionState};
