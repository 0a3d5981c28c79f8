//! [`RemoteCollection`] adapters over the API client.

use async_trait::async_trait;

use ims_core::result::AppResult;
use ims_core::traits::remote::RemoteCollection;
use ims_core::types::{CategoryId, PositionUpdate};
use ims_entity::{Category, Product};

use crate::client::ApiClient;

/// Products as an ordered remote collection.
#[derive(Debug, Clone)]
pub struct ProductRemote {
    client: ApiClient,
}

impl ProductRemote {
    /// Wrap an API client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteCollection<Product> for ProductRemote {
    async fn fetch_all(&self) -> AppResult<Vec<Product>> {
        self.client.all_products().await
    }

    async fn save_order(&self, order: Vec<PositionUpdate>) -> AppResult<()> {
        self.client.reorder_products(&order).await
    }
}

/// Categories as an ordered remote collection.
///
/// The category endpoint takes the bare id list; positions are implied by
/// list order.
#[derive(Debug, Clone)]
pub struct CategoryRemote {
    client: ApiClient,
}

impl CategoryRemote {
    /// Wrap an API client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteCollection<Category> for CategoryRemote {
    async fn fetch_all(&self) -> AppResult<Vec<Category>> {
        self.client.all_categories().await
    }

    async fn save_order(&self, mut order: Vec<PositionUpdate>) -> AppResult<()> {
        order.sort_by_key(|update| update.position);
        let ids: Vec<CategoryId> = order.into_iter().map(|u| CategoryId::from(u.id)).collect();
        self.client.reorder_categories(&ids).await
    }
}
