//! Navigation through the route table and the access guard.

use serde::Serialize;
use tracing::info;

use ims_auth::guard::{AccessGuard, GuardDecision, RouteTable};
use ims_auth::session::SessionState;
use ims_core::error::AppError;
use ims_core::result::AppResult;

/// The result of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// URL as requested.
    pub requested: String,
    /// Pattern of the matched route.
    pub route: String,
    /// Title of the matched route.
    pub title: String,
    /// Guard verdict.
    pub decision: GuardDecision,
    /// Where the user ends up: the requested URL, or the redirect target.
    pub target: String,
}

/// Resolves URLs and runs the guard for guarded routes.
#[derive(Debug, Clone)]
pub struct Navigator {
    routes: RouteTable,
    guard: AccessGuard,
    session: SessionState,
}

impl Navigator {
    /// Creates a navigator over the standard route table.
    pub fn new(session: SessionState) -> Self {
        Self::with_routes(RouteTable::standard(), session)
    }

    /// Creates a navigator over an explicit route table.
    pub fn with_routes(routes: RouteTable, session: SessionState) -> Self {
        Self {
            routes,
            guard: AccessGuard::new(),
            session,
        }
    }

    /// Attempt to navigate to `url`.
    pub fn navigate(&self, url: &str) -> AppResult<Navigation> {
        let resolved = self
            .routes
            .resolve(url)
            .ok_or_else(|| AppError::not_found(format!("No route matches '{url}'")))?;

        let decision = if resolved.descriptor.guarded {
            self.guard
                .check(&self.session, &resolved.descriptor, &resolved.url)
        } else {
            GuardDecision::Allow
        };
        let target = decision
            .redirect_target()
            .unwrap_or_else(|| resolved.url.clone());

        info!(
            requested = url,
            route = %resolved.descriptor.pattern,
            target = %target,
            allowed = decision.is_allowed(),
            "Navigation"
        );

        Ok(Navigation {
            requested: url.to_string(),
            route: resolved.descriptor.pattern,
            title: resolved.descriptor.title,
            decision,
            target,
        })
    }

    /// The route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use ims_auth::credential::CredentialStore;
    use ims_core::config::CredentialConfig;
    use ims_storage::memory::MemoryStorage;

    fn navigator(role: Option<&str>) -> Navigator {
        let store = CredentialStore::new(Arc::new(MemoryStorage::new()), &CredentialConfig::default());
        let session = SessionState::new(store);
        if let Some(role) = role {
            session.establish("jwt", role).unwrap();
        }
        Navigator::new(session)
    }

    #[test]
    fn test_manager_scenario() {
        let nav = navigator(Some("MANAGER"));

        let purchase = nav.navigate("/purchase").unwrap();
        assert_eq!(purchase.decision, GuardDecision::Allow);
        assert_eq!(purchase.target, "/purchase");
        assert_eq!(purchase.title, "Purchase Management");

        let category = nav.navigate("/category").unwrap();
        assert_eq!(category.decision, GuardDecision::RedirectToForbidden);
        assert_eq!(category.target, "/forbidden");
    }

    #[test]
    fn test_anonymous_is_sent_to_login_with_return_url() {
        let nav = navigator(None);
        let result = nav.navigate("/transactions").unwrap();
        assert_eq!(
            result.decision,
            GuardDecision::RedirectToLogin {
                return_url: "/transactions".into()
            }
        );
        assert_eq!(result.target, "/login?returnUrl=%2Ftransactions");
    }

    #[test]
    fn test_open_routes_skip_the_guard() {
        let nav = navigator(None);
        assert!(nav.navigate("/login").unwrap().decision.is_allowed());
        assert!(nav.navigate("/register").unwrap().decision.is_allowed());
    }

    #[test]
    fn test_unknown_url_lands_on_dashboard() {
        let nav = navigator(Some("ADMIN"));
        let result = nav.navigate("/does-not-exist").unwrap();
        assert_eq!(result.route, "/dashboard");
        assert_eq!(result.target, "/dashboard");
    }

    #[test]
    fn test_unknown_role_is_forbidden_on_admin_routes() {
        let nav = navigator(Some("AUDITOR"));
        assert_eq!(
            nav.navigate("/product").unwrap().decision,
            GuardDecision::RedirectToForbidden
        );
        assert!(nav.navigate("/profile").unwrap().decision.is_allowed());
    }
}
