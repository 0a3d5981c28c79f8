//! Stock transaction entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use ims_core::types::{ProductId, SupplierId, TransactionId};

/// Kind of stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Stock bought from a supplier.
    Purchase,
    /// Stock sold to a customer.
    Sale,
    /// Stock returned to a supplier.
    ReturnToSupplier,
}

/// Processing state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// Awaiting processing.
    Pending,
    /// Being processed.
    Processing,
    /// Done.
    Completed,
    /// Cancelled.
    Canceled,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        };
        f.write_str(name)
    }
}

/// A purchase, sale, or return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction identifier.
    pub id: TransactionId,
    /// Units moved.
    #[serde(default)]
    pub total_products: Option<i64>,
    /// Total price of the movement.
    #[serde(default)]
    pub total_price: Option<serde_json::Number>,
    /// Movement kind.
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    /// Processing state.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Product moved.
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Supplier involved, for purchases and returns.
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
