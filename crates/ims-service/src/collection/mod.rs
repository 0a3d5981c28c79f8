//! Ordered collections: local order, derived window, remote persistence.

pub mod controller;
pub mod ordered;
pub mod window;

pub use controller::{CollectionController, CollectionSettings, ReorderHandle, ReorderOutcome};
pub use ordered::OrderedCollection;
pub use window::ViewWindow;
