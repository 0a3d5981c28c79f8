//! Ordered collection and notice configuration.

use serde::{Deserialize, Serialize};

/// How a failed reorder is reconciled with the local collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollbackPolicy {
    /// Restore the failed reorder's own snapshot; the last rollback wins.
    #[default]
    Snapshot,
    /// Restore only when no later mutation was applied, otherwise re-fetch
    /// once every in-flight reorder has settled.
    Sequenced,
}

/// Settings for the list views backed by an ordered collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Items per page on the product view.
    #[serde(default = "default_product_page_size")]
    pub product_page_size: usize,
    /// Items per page on the category view.
    #[serde(default = "default_category_page_size")]
    pub category_page_size: usize,
    /// Reconciliation strategy for failed reorders.
    #[serde(default)]
    pub rollback: RollbackPolicy,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            product_page_size: default_product_page_size(),
            category_page_size: default_category_page_size(),
            rollback: RollbackPolicy::default(),
        }
    }
}

/// Settings for transient user-facing messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// How long a message stays visible, in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
        }
    }
}

fn default_product_page_size() -> usize {
    9
}

fn default_category_page_size() -> usize {
    25
}

fn default_ttl_ms() -> u64 {
    4000
}
