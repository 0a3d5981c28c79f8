//! Product category.

use serde::{Deserialize, Serialize};

use ims_core::types::{CategoryId, SearchQuery};

use crate::order::Orderable;

/// A product category; admins can drag categories into a custom order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Durable display position.
    #[serde(default)]
    pub position: Option<i64>,
}

impl Category {
    /// Create a category at the given position.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, position: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: Some(position),
        }
    }
}

impl Orderable for Category {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn position(&self) -> i64 {
        self.position.unwrap_or(i64::MAX)
    }

    fn set_position(&mut self, position: i64) {
        self.position = Some(position);
    }

    fn matches(&self, query: &SearchQuery) -> bool {
        query.matches_text(&self.name)
    }
}
