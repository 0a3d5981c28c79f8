//! Free-text search input for list views.

use serde::{Deserialize, Serialize};

/// A normalized search needle.
///
/// Input is trimmed and lowercased once; an empty needle matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalize raw user input into a query.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Whether the query filters anything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The normalized needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive substring test against one field.
    pub fn matches_text(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }

    /// Whether any of the given fields contains the needle.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.is_empty() || fields.into_iter().any(|field| self.matches_text(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_input() {
        let query = SearchQuery::new("  WiDgEt ");
        assert_eq!(query.needle(), "widget");
        assert!(query.matches_text("Blue widget XL"));
        assert!(!query.matches_text("gadget"));
    }

    #[test]
    fn test_empty_matches_everything() {
        let query = SearchQuery::new("   ");
        assert!(query.is_empty());
        assert!(query.matches_any(std::iter::empty()));
    }

    #[test]
    fn test_matches_any_field() {
        let query = SearchQuery::new("12");
        assert!(query.matches_any(["bolt", "SKU-12"]));
        assert!(!query.matches_any(["bolt", "SKU-9"]));
    }
}
