//! Position assignments mirrored to the remote store.

use serde::{Deserialize, Serialize};

/// One `{id, position}` pair of a reorder submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionUpdate {
    /// Item identifier.
    #[serde(serialize_with = "crate::types::id::serialize_flexible")]
    pub id: String,
    /// New zero-based position.
    pub position: i64,
}

impl PositionUpdate {
    /// Create a new position update.
    pub fn new(id: impl Into<String>, position: i64) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}
