//! Login, logout and session inspection.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use ims_core::error::AppError;
use ims_service::AppContext;

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,
    /// Account password
    #[arg(short, long)]
    pub password: String,
}

#[derive(Debug, Serialize)]
struct SessionView {
    authenticated: bool,
    role: Option<String>,
    admin: bool,
    name: Option<String>,
    email: Option<String>,
}

/// Log in and report the landing page
pub async fn login(args: &LoginArgs, ctx: &AppContext) -> Result<(), AppError> {
    let outcome = ctx.login.login(&args.email, &args.password).await?;
    output::print_success(&format!(
        "Logged in as {} ({}); landing on {}",
        args.email.trim(),
        outcome.role,
        outcome.landing
    ));
    Ok(())
}

/// Clear stored credentials
pub fn logout(ctx: &AppContext) -> Result<(), AppError> {
    ctx.login.logout()?;
    output::print_success("Logged out");
    Ok(())
}

/// Show the session and, when logged in, the profile the API reports
pub async fn whoami(ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    let session = ctx.session.snapshot();
    let mut view = SessionView {
        authenticated: session.is_authenticated(),
        role: ctx.session.raw_role(),
        admin: session.is_admin(),
        name: None,
        email: None,
    };

    if session.is_authenticated() {
        match ctx.client.current_user().await {
            Ok(user) => {
                view.name = Some(user.name);
                view.email = Some(user.email);
            }
            Err(e) => output::print_warning(&e.user_message("Unable to load profile")),
        }
    }

    output::print_item(&view, format);
    Ok(())
}
