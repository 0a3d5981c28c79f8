//! Remote persistence boundary for an ordered collection.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::order::PositionUpdate;

/// The remote store that owns the durable order of a collection.
///
/// Each call resolves exactly once with either a value or a failure; there
/// is no retry at this layer.
#[async_trait]
pub trait RemoteCollection<T>: Send + Sync + 'static
where
    T: Send + 'static,
{
    /// Fetch every item of the collection, in whatever order the API returns.
    async fn fetch_all(&self) -> AppResult<Vec<T>>;

    /// Persist a complete position assignment. Must be idempotent.
    async fn save_order(&self, order: Vec<PositionUpdate>) -> AppResult<()>;
}
