//! The contract list items must satisfy to live in an ordered collection.

use ims_core::types::{PositionUpdate, SearchQuery};

/// An item with a stable id and a durable display position.
///
/// Local order (vector index) is what the UI shows; `position` is the
/// field mirrored to the remote store.
pub trait Orderable: Clone + Send + Sync + 'static {
    /// Stable identifier.
    fn id(&self) -> &str;

    /// Durable position as last received or assigned.
    fn position(&self) -> i64;

    /// Overwrite the durable position.
    fn set_position(&mut self, position: i64);

    /// Whether the item should be visible under `query`.
    fn matches(&self, query: &SearchQuery) -> bool;

    /// The `{id, position}` pair for a reorder submission at `index`.
    fn position_update(&self, index: usize) -> PositionUpdate {
        PositionUpdate::new(self.id(), index as i64)
    }
}
