//! Navigable routes and their authorization metadata.

use serde::{Deserialize, Serialize};

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";
/// Path of the access-denied view.
pub const FORBIDDEN_PATH: &str = "/forbidden";
/// Where the empty path and unknown paths land.
pub const DEFAULT_PATH: &str = "/dashboard";

/// Static metadata attached to a navigable route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Path pattern; segments starting with `:` match any single segment.
    pub pattern: String,
    /// Whether the access guard runs before the route activates.
    pub guarded: bool,
    /// Whether only ADMIN may enter (managers only via the allow-list).
    #[serde(default)]
    pub requires_admin: bool,
    /// Page title shown in the header.
    pub title: String,
}

impl RouteDescriptor {
    /// A guarded route any authenticated role may enter.
    pub fn guarded(pattern: &str, title: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            guarded: true,
            requires_admin: false,
            title: title.to_string(),
        }
    }

    /// A guarded route flagged admin-only.
    pub fn admin(pattern: &str, title: &str) -> Self {
        Self {
            requires_admin: true,
            ..Self::guarded(pattern, title)
        }
    }

    /// A route anyone may enter, logged in or not.
    pub fn open(pattern: &str, title: &str) -> Self {
        Self {
            guarded: false,
            ..Self::guarded(pattern, title)
        }
    }

    /// Whether `path` (already normalized) matches this route's pattern.
    pub fn matches(&self, path: &str) -> bool {
        let mut want = self.pattern.trim_matches('/').split('/');
        let mut have = path.trim_matches('/').split('/');
        loop {
            match (want.next(), have.next()) {
                (None, None) => return true,
                (Some(w), Some(h)) if w.starts_with(':') => {
                    if h.is_empty() {
                        return false;
                    }
                }
                (Some(w), Some(h)) if w == h => {}
                _ => return false,
            }
        }
    }
}

/// The outcome of resolving a URL against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// The matched route.
    pub descriptor: RouteDescriptor,
    /// The URL the guard should see (the original URL, or the fallback
    /// path when the original matched nothing).
    pub url: String,
    /// Set when the original URL was redirected to the fallback route.
    pub redirected_from: Option<String>,
}

/// Ordered list of routes with a fallback for the empty path and misses.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Routes in match order.
    routes: Vec<RouteDescriptor>,
    /// Path used for `""` and unknown URLs.
    fallback: String,
}

impl RouteTable {
    /// Creates a table from explicit routes.
    pub fn new(routes: Vec<RouteDescriptor>, fallback: impl Into<String>) -> Self {
        Self {
            routes,
            fallback: fallback.into(),
        }
    }

    /// The inventory client's route set.
    pub fn standard() -> Self {
        Self::new(
            vec![
                RouteDescriptor::open(LOGIN_PATH, "Login"),
                RouteDescriptor::open("/register", "Register"),
                RouteDescriptor::admin("/category", "Manage Categories"),
                RouteDescriptor::admin("/supplier", "Manage Suppliers"),
                RouteDescriptor::admin("/edit-supplier/:supplierId", "Edit Supplier"),
                RouteDescriptor::admin("/add-supplier", "Add New Supplier"),
                RouteDescriptor::admin("/product", "Explore Products"),
                RouteDescriptor::admin("/edit-product/:productId", "Edit Product"),
                RouteDescriptor::admin("/add-product", "Add New Product"),
                RouteDescriptor::guarded("/purchase", "Purchase Management"),
                RouteDescriptor::guarded("/sell", "Sell Products"),
                RouteDescriptor::guarded("/transactions", "Transaction History"),
                RouteDescriptor::guarded("/transaction/:transactionId", "Transaction Details"),
                RouteDescriptor::guarded("/profile", "My Profile"),
                RouteDescriptor::guarded(DEFAULT_PATH, "Dashboard Overview"),
                RouteDescriptor::open(FORBIDDEN_PATH, "Access Forbidden"),
            ],
            DEFAULT_PATH,
        )
    }

    /// All routes in match order.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Find the route for `url`, following the fallback redirect if needed.
    ///
    /// Query strings and fragments do not take part in matching but are
    /// preserved in [`ResolvedRoute::url`].
    pub fn resolve(&self, url: &str) -> Option<ResolvedRoute> {
        let path = normalize_path(url);
        if path != "/" {
            if let Some(descriptor) = self.find(&path) {
                return Some(ResolvedRoute {
                    descriptor: descriptor.clone(),
                    url: normalize_url(url),
                    redirected_from: None,
                });
            }
        }

        self.find(&self.fallback).map(|descriptor| ResolvedRoute {
            descriptor: descriptor.clone(),
            url: self.fallback.clone(),
            redirected_from: Some(url.to_string()),
        })
    }

    fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.matches(path))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Strip query and fragment, force a leading slash, drop a trailing one.
pub fn normalize_path(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    }
}
