//! The locally materialized, ordered list behind a list view.

use ims_core::error::AppError;
use ims_core::result::AppResult;
use ims_core::types::{PageRequest, PositionUpdate, SearchQuery};
use ims_entity::Orderable;

use super::window::{ViewWindow, matching_indices};

/// Full collection plus the search and page state that derive its window.
///
/// All moves operate on the full list; the window is recomputed after every
/// mutation and never edited directly.
#[derive(Debug, Clone)]
pub struct OrderedCollection<T: Orderable> {
    items: Vec<T>,
    query: SearchQuery,
    page: PageRequest,
    window: ViewWindow<T>,
    /// Bumped on every mutation of `items`.
    revision: u64,
}

impl<T: Orderable> OrderedCollection<T> {
    /// An empty collection showing `page_size` items per page.
    pub fn new(page_size: usize) -> Self {
        let page = PageRequest::new(1, page_size);
        let query = SearchQuery::default();
        Self {
            window: ViewWindow::compute(&[], &query, page),
            items: Vec::new(),
            query,
            page,
            revision: 0,
        }
    }

    /// Replace the collection, sorted ascending by position.
    ///
    /// The sort is stable, so items sharing a position keep the order the
    /// remote store sent them in.
    pub fn load(&mut self, mut items: Vec<T>) {
        items.sort_by_key(|item| item.position());
        self.items = items;
        self.touch();
    }

    /// Change the search text and go back to page 1.
    pub fn set_search(&mut self, raw: &str) {
        self.query = SearchQuery::new(raw);
        self.page = PageRequest::new(1, self.page.page_size);
        self.recompute();
    }

    /// Go to page `n`, clamped to the available pages.
    pub fn set_page(&mut self, n: usize) {
        self.page = PageRequest::new(n, self.page.page_size);
        self.recompute();
    }

    /// Relocate the item at `from` to `to` in the full collection.
    ///
    /// Items between the two indices shift by one. `from == to` changes
    /// nothing and does not bump the revision.
    pub fn move_item(&mut self, from: usize, to: usize) -> AppResult<()> {
        check_index("from", from, self.items.len())?;
        check_index("to", to, self.items.len())?;
        if from == to {
            return Ok(());
        }
        relocate(&mut self.items, from, to);
        self.touch();
        Ok(())
    }

    /// Relocate within the search-filtered sequence.
    ///
    /// The matching items are permuted among the full-collection slots they
    /// already occupy, so items hidden by the search never move. With no
    /// search active this is [`move_item`](Self::move_item).
    pub fn move_filtered(&mut self, from: usize, to: usize) -> AppResult<()> {
        let slots = matching_indices(&self.items, &self.query);
        check_index("from", from, slots.len())?;
        check_index("to", to, slots.len())?;
        if from == to {
            return Ok(());
        }

        let mut subset: Vec<T> = slots.iter().map(|&i| self.items[i].clone()).collect();
        relocate(&mut subset, from, to);
        for (slot, item) in slots.into_iter().zip(subset) {
            self.items[slot] = item;
        }
        self.touch();
        Ok(())
    }

    /// Relocate using indices relative to the current page.
    pub fn move_in_view(&mut self, from: usize, to: usize) -> AppResult<()> {
        check_index("from", from, self.window.len())?;
        check_index("to", to, self.window.len())?;
        let offset = self.window.filtered_offset();
        self.move_filtered(offset + from, offset + to)
    }

    /// Set every item's position to its index.
    pub fn assign_positions(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.set_position(index as i64);
        }
        self.recompute();
    }

    /// The `{id, position}` list for the current order.
    pub fn positions(&self) -> Vec<PositionUpdate> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| item.position_update(index))
            .collect()
    }

    /// Put back a previously taken snapshot.
    pub fn restore(&mut self, snapshot: Vec<T>) {
        self.items = snapshot;
        self.touch();
    }

    /// An owned copy of the current order.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    /// The full collection.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The current window.
    pub fn window(&self) -> &ViewWindow<T> {
        &self.window
    }

    /// The active search.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Items in the full collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Mutation counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.window = ViewWindow::compute(&self.items, &self.query, self.page);
        self.page = PageRequest::new(self.window.page, self.page.page_size);
    }
}

fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

fn check_index(name: &str, index: usize, len: usize) -> AppResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Index {name}={index} is out of range for {len} items"
        )))
    }
}
