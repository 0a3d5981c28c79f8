//! Session status derived from the credential store.

pub mod state;

pub use state::{Session, SessionState};
