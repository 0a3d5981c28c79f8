//! CLI command definitions and dispatch.

pub mod auth;
pub mod collection;
pub mod navigate;
pub mod prefs;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use ims_core::error::AppError;
use ims_service::AppContext;

/// IMS inventory management client
#[derive(Debug, Parser)]
#[command(name = "ims", version, about, long_about = None)]
pub struct Cli {
    /// Extra configuration file layered over config/default and config/{env}
    #[arg(short, long)]
    pub config: Option<String>,

    /// Configuration environment overlay
    #[arg(short, long, default_value = "local")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and store the issued credentials
    Login(auth::LoginArgs),
    /// Forget the stored credentials
    Logout,
    /// Show the current session
    Whoami,
    /// Evaluate the access guard for a URL
    Navigate(navigate::NavigateArgs),
    /// List products
    Products(collection::ListArgs),
    /// List categories
    Categories(collection::ListArgs),
    /// Move an item within a collection
    Reorder(collection::ReorderArgs),
    /// Show or change UI preferences
    Prefs(prefs::PrefsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, ctx: &AppContext) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => auth::login(args, ctx).await,
            Commands::Logout => auth::logout(ctx),
            Commands::Whoami => auth::whoami(ctx, self.format).await,
            Commands::Navigate(args) => navigate::execute(args, ctx, self.format),
            Commands::Products(args) => collection::list_products(args, ctx, self.format).await,
            Commands::Categories(args) => {
                collection::list_categories(args, ctx, self.format).await
            }
            Commands::Reorder(args) => collection::reorder(args, ctx, self.format).await,
            Commands::Prefs(args) => prefs::execute(args, ctx, self.format),
        }
    }
}
