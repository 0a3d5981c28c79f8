//! Pagination types for list views.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: usize = 25;
/// Maximum page size.
const MAX_PAGE_SIZE: usize = 100;

/// Request parameters for a page of a locally held list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: usize,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.page_size
    }

    /// Number of items per page.
    pub fn limit(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total_items` (at least one).
    pub fn total_pages(&self, total_items: usize) -> usize {
        if total_items == 0 {
            1
        } else {
            total_items.div_ceil(self.page_size)
        }
    }

    /// Same page size, page number clamped into `1..=total_pages`.
    pub fn clamped(&self, total_items: usize) -> Self {
        Self {
            page: self.page.clamp(1, self.total_pages(total_items)),
            page_size: self.page_size,
        }
    }

    /// The index range this page covers in a list of `total_items`.
    pub fn range(&self, total_items: usize) -> Range<usize> {
        let start = self.offset().min(total_items);
        let end = (start + self.page_size).min(total_items);
        start..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of a list, with enough metadata to render a pager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: usize,
    /// Number of items per page.
    pub page_size: usize,
    /// Total number of items across all pages.
    pub total_items: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: usize, page_size: usize, total_items: usize) -> Self {
        let total_pages = PageRequest::new(page, page_size).total_pages(total_items);
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Create an empty response.
    pub fn empty(page_request: &PageRequest) -> Self {
        Self {
            items: Vec::new(),
            page: page_request.page,
            page_size: page_request.page_size,
            total_items: 0,
            total_pages: 1,
            has_next: false,
            has_previous: false,
        }
    }
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_inputs() {
        let req = PageRequest::new(0, 500);
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_range_covers_partial_last_page() {
        let req = PageRequest::new(4, 3);
        assert_eq!(req.range(10), 9..10);
        assert_eq!(PageRequest::new(5, 3).range(10), 10..10);
    }

    #[test]
    fn test_total_pages_and_clamp() {
        let req = PageRequest::new(9, 3);
        assert_eq!(req.total_pages(0), 1);
        assert_eq!(req.total_pages(9), 3);
        assert_eq!(req.total_pages(10), 4);
        assert_eq!(req.clamped(4).page, 2);
        assert_eq!(req.clamped(0).page, 1);
    }

    #[test]
    fn test_response_flags() {
        let page = PageResponse::new(vec![4, 5, 6], 2, 3, 7);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(page.has_previous);
    }
}
