//! Supplier entity.

use serde::{Deserialize, Serialize};

use ims_core::types::SupplierId;

/// A supplier products are purchased from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Unique supplier identifier.
    pub id: SupplierId,
    /// Company name.
    pub name: String,
    /// Contact details.
    #[serde(default)]
    pub contact_info: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
}
