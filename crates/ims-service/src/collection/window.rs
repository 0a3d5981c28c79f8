//! The derived, rendered slice of a collection.

use serde::Serialize;

use ims_core::types::{PageRequest, PageResponse, SearchQuery};
use ims_entity::Orderable;

/// Search-filtered, paginated view of a full collection.
///
/// Never stored on its own; always recomputed from the full list, the
/// search predicate and the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewWindow<T> {
    /// Items visible on the current page, in collection order.
    pub items: Vec<T>,
    /// Full-collection index of each visible item.
    pub full_indices: Vec<usize>,
    /// Current page (1-based, already clamped).
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Items matching the search predicate across all pages.
    pub total_matches: usize,
    /// Pages needed for the matches (at least one).
    pub total_pages: usize,
}

impl<T: Orderable> ViewWindow<T> {
    /// Recompute the window.
    ///
    /// `page` is clamped into range, so the returned window's `page` may
    /// differ from the requested one.
    pub fn compute(full: &[T], query: &SearchQuery, page: PageRequest) -> Self {
        let matching = matching_indices(full, query);
        let page = page.clamped(matching.len());
        let range = page.range(matching.len());
        let full_indices = matching[range].to_vec();
        let items = full_indices.iter().map(|&i| full[i].clone()).collect();

        Self {
            items,
            full_indices,
            page: page.page,
            page_size: page.page_size,
            total_matches: matching.len(),
            total_pages: page.total_pages(matching.len()),
        }
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Offset of this page within the filtered sequence.
    pub fn filtered_offset(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }
}

impl<T: Orderable + Serialize> ViewWindow<T> {
    /// The window as a pager-friendly response.
    pub fn to_page(&self) -> PageResponse<T> {
        PageResponse::new(self.items.clone(), self.page, self.page_size, self.total_matches)
    }
}

/// Full-collection indices of every item matching `query`, in order.
pub fn matching_indices<T: Orderable>(full: &[T], query: &SearchQuery) -> Vec<usize> {
    full.iter()
        .enumerate()
        .filter(|(_, item)| query.is_empty() || item.matches(query))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ims_entity::Category;

    fn categories(names: &[&str]) -> Vec<Category> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Category::new(i as i64 + 1, *n, i as i64))
            .collect()
    }

    #[test]
    fn test_window_pages_and_clamps() {
        let full = categories(&["a", "b", "c", "d", "e"]);
        let window = ViewWindow::compute(&full, &SearchQuery::default(), PageRequest::new(2, 2));
        assert_eq!(window.full_indices, vec![2, 3]);
        assert_eq!(window.total_pages, 3);

        let window = ViewWindow::compute(&full, &SearchQuery::default(), PageRequest::new(9, 2));
        assert_eq!(window.page, 3);
        assert_eq!(window.full_indices, vec![4]);
    }

    #[test]
    fn test_window_filters_before_paging() {
        let full = categories(&["bolt", "nut", "bolt xl", "washer", "anchor bolt"]);
        let window = ViewWindow::compute(&full, &SearchQuery::new("BOLT"), PageRequest::new(1, 2));
        assert_eq!(window.full_indices, vec![0, 2]);
        assert_eq!(window.total_matches, 3);
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.filtered_offset(), 0);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let window = ViewWindow::<Category>::compute(&[], &SearchQuery::default(), PageRequest::new(3, 9));
        assert!(window.is_empty());
        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.to_page().total_items, 0);
    }
}
