//! Well-known local storage keys.
//!
//! Centralising the key names prevents typos and makes it easy
//! to find every entry the client persists.

// ── Credentials (encrypted) ────────────────────────────────

/// Bearer token issued at login.
pub const TOKEN: &str = "token";

/// Role name issued at login.
pub const ROLE: &str = "role";

/// Every credential entry, cleared together on logout.
pub const CREDENTIALS: [&str; 2] = [TOKEN, ROLE];

// ── UI preferences (plaintext) ─────────────────────────────

/// `"true"` when the sidebar is collapsed.
pub const SIDEBAR_COLLAPSED: &str = "sidebar-collapsed";

/// `"grid"` or `"table"` for the product list.
pub const PRODUCT_VIEW_MODE: &str = "productViewMode";

/// JSON blob with theme and navigation layout choices.
pub const UI_PREFS: &str = "ui-prefs-v1";
