//! The access decision evaluated once per navigation attempt.

use serde::Serialize;
use tracing::debug;

use ims_entity::user::Role;

use super::route::{FORBIDDEN_PATH, LOGIN_PATH, RouteDescriptor};
use crate::session::{Session, SessionState};

/// URLs a manager may reach even when the route is flagged admin-only.
///
/// Matched exactly against the requested URL.
pub const MANAGER_ALLOWED_PATHS: [&str; 3] = ["/transactions", "/purchase", "/sell"];

/// What the router should do with a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Activate the requested route.
    Allow,
    /// Go to the login view; come back to `return_url` afterwards.
    RedirectToLogin {
        /// The originally requested URL.
        return_url: String,
    },
    /// Go to the access-denied view.
    RedirectToForbidden,
}

impl GuardDecision {
    /// Whether navigation proceeds.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The redirect URL, if navigation was denied.
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin { return_url } => {
                let encoded: String = url::form_urlencoded::byte_serialize(return_url.as_bytes())
                    .collect();
                Some(format!("{LOGIN_PATH}?returnUrl={encoded}"))
            }
            Self::RedirectToForbidden => Some(FORBIDDEN_PATH.to_string()),
        }
    }
}

/// Decides allow / redirect-to-login / redirect-to-forbidden.
///
/// Never fails: every input resolves to a decision. Nothing is retried; a
/// denied user has to navigate again.
#[derive(Debug, Clone, Default)]
pub struct AccessGuard;

impl AccessGuard {
    /// Creates a new guard.
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a navigation against an already-read session.
    pub fn evaluate(
        &self,
        session: &Session,
        route: &RouteDescriptor,
        requested_url: &str,
    ) -> GuardDecision {
        if session.token.is_none() {
            return GuardDecision::RedirectToLogin {
                return_url: requested_url.to_string(),
            };
        }

        if route.requires_admin && session.role != Some(Role::Admin) {
            if session.role == Some(Role::Manager) && is_manager_allowed(requested_url) {
                return GuardDecision::Allow;
            }
            return GuardDecision::RedirectToForbidden;
        }

        GuardDecision::Allow
    }

    /// Evaluate a navigation, reading the session fresh from the store.
    pub fn check(
        &self,
        state: &SessionState,
        route: &RouteDescriptor,
        requested_url: &str,
    ) -> GuardDecision {
        let session = state.snapshot();
        let decision = self.evaluate(&session, route, requested_url);
        debug!(
            url = requested_url,
            route = %route.pattern,
            role = ?session.role,
            decision = ?decision,
            "Guard evaluated"
        );
        decision
    }
}

fn is_manager_allowed(url: &str) -> bool {
    MANAGER_ALLOWED_PATHS.contains(&url)
}
