//! IMS console client
//!
//! Main entry point that loads configuration, wires all crates together
//! and runs one CLI command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use ims_cli::Cli;
use ims_cli::output;
use ims_core::config::AppConfig;
use ims_core::error::AppError;
use ims_service::AppContext;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env, cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&cli, config).await {
        tracing::debug!(kind = %e.kind, "Command failed");
        output::print_error(&e.user_message("Command failed"));
        std::process::exit(1);
    }
}

/// Build the client context and execute the parsed command
async fn run(cli: &Cli, config: AppConfig) -> Result<(), AppError> {
    tracing::debug!(env = %cli.env, "Configuration loaded");
    let ctx = AppContext::build(config)?;
    cli.execute(&ctx).await
}

/// Initialize tracing/logging
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
