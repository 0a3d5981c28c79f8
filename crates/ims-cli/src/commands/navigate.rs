//! Guard evaluation for a single URL.

use clap::Args;

use crate::output::{self, OutputFormat};
use ims_core::error::AppError;
use ims_service::AppContext;

/// Arguments for `navigate`
#[derive(Debug, Args)]
pub struct NavigateArgs {
    /// URL to navigate to, e.g. /product?page=2
    pub url: String,
}

/// Resolve the URL, run the guard and print the verdict
pub fn execute(args: &NavigateArgs, ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    let navigation = ctx.navigator.navigate(&args.url)?;
    match format {
        OutputFormat::Json => output::print_item(&navigation, format),
        OutputFormat::Table => {
            if navigation.decision.is_allowed() {
                output::print_success(&format!("{} ({})", navigation.target, navigation.title));
            } else {
                output::print_warning(&format!("Redirected to {}", navigation.target));
            }
        }
    }
    Ok(())
}
