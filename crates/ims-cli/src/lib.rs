//! # ims-cli
//!
//! Command tree and output formatting for the `ims` binary. Commands run
//! against an [`ims_service::AppContext`] built by the caller.

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::OutputFormat;
