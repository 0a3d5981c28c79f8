//! # ims-entity
//!
//! Domain models for the inventory client. Every struct in this crate is a
//! JSON shape the inventory API sends or accepts; all derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize` with the API's camelCase names.

pub mod category;
pub mod order;
pub mod product;
pub mod supplier;
pub mod transaction;
pub mod user;

pub use category::Category;
pub use order::Orderable;
pub use product::Product;
pub use supplier::Supplier;
pub use transaction::{Transaction, TransactionStatus, TransactionType};
pub use user::{Role, User};
