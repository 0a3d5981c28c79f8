//! # ims-client
//!
//! Typed access to the inventory REST API. Every protected call carries
//! `Authorization: Bearer <token>` read from the session at call time, and
//! every response is checked against the `{status, message, ...}` envelope
//! convention before its payload is handed back.

pub mod client;
pub mod envelope;
pub mod remote;

pub use client::{ApiClient, LoginRequest, LoginResponse, RegisterRequest, TransactionQuery};
pub use envelope::Envelope;
pub use remote::{CategoryRemote, ProductRemote};
