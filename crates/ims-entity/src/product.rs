//! Product entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use ims_core::types::{CategoryId, ProductId, SearchQuery, SupplierId};

use crate::order::Orderable;

/// A stocked product as listed by `/products/all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: Option<String>,
    /// Unit price, as the decimal the API sends.
    #[serde(default)]
    pub price: Option<serde_json::Number>,
    /// Units in stock.
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image file name on the API's image host.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Owning category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Default supplier.
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    /// Durable display position.
    #[serde(default)]
    pub position: Option<i64>,
    /// Expiry date for perishable stock.
    #[serde(default)]
    pub expiry_date: Option<NaiveDateTime>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Product {
    /// Create a bare product with a name and position.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, position: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: None,
            price: None,
            stock_quantity: None,
            description: None,
            image_url: None,
            category_id: None,
            supplier_id: None,
            position: Some(position),
            expiry_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Builder-style SKU setter.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Builder-style stock setter.
    pub fn with_stock(mut self, quantity: i64) -> Self {
        self.stock_quantity = Some(quantity);
        self
    }
}

impl Orderable for Product {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn position(&self) -> i64 {
        self.position.unwrap_or(i64::MAX)
    }

    fn set_position(&mut self, position: i64) {
        self.position = Some(position);
    }

    /// Name, SKU, price, and stock quantity are searchable.
    fn matches(&self, query: &SearchQuery) -> bool {
        let price = self.price.as_ref().map(ToString::to_string);
        let stock = self.stock_quantity.map(|q| q.to_string());
        query.matches_any(
            [
                Some(self.name.as_str()),
                self.sku.as_deref(),
                price.as_deref(),
                stock.as_deref(),
            ]
            .into_iter()
            .flatten(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_api_shape() {
        let raw = r#"{
            "id": 12,
            "productId": 12,
            "categoryId": 3,
            "position": 4,
            "name": "Copper Wire",
            "sku": "CW-100",
            "price": 19.99,
            "stockQuantity": 250,
            "imageUrl": "wire.png",
            "createdAt": "2025-03-01T10:15:30"
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id.as_str(), "12");
        assert_eq!(product.category_id.as_ref().map(|c| c.as_str()), Some("3"));
        assert_eq!(Orderable::position(&product), 4);
        assert!(product.created_at.is_some());
    }

    #[test]
    fn test_search_fields() {
        let raw = r#"{"id": 1, "name": "Hex Bolt", "sku": "HB-8", "price": 0.25, "stockQuantity": 900}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert!(product.matches(&SearchQuery::new("hex")));
        assert!(product.matches(&SearchQuery::new("hb-8")));
        assert!(product.matches(&SearchQuery::new("0.25")));
        assert!(product.matches(&SearchQuery::new("900")));
        assert!(!product.matches(&SearchQuery::new("washer")));
    }

    #[test]
    fn test_missing_position_sorts_last() {
        let mut product = Product::new("9", "Loose", 0);
        product.position = None;
        assert_eq!(Orderable::position(&product), i64::MAX);
    }
}
