//! UI preference commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, OutputFormat};
use ims_core::error::AppError;
use ims_service::{AppContext, LayoutPrefs, NavPosition, ThemeMode, ViewMode, VnavStyle};

/// Arguments for prefs commands
#[derive(Debug, Args)]
pub struct PrefsArgs {
    /// Prefs subcommand
    #[command(subcommand)]
    pub command: PrefsCommand,
}

/// Prefs subcommands
#[derive(Debug, Subcommand)]
pub enum PrefsCommand {
    /// Show every preference
    Show,
    /// Change one or more preferences
    Set {
        /// Collapse the sidebar
        #[arg(long)]
        sidebar_collapsed: Option<bool>,
        /// Product view mode (grid, table)
        #[arg(long)]
        view_mode: Option<ViewMode>,
        /// Theme (auto, light, dark)
        #[arg(long)]
        theme: Option<ThemeMode>,
        /// Full-width layout
        #[arg(long)]
        fluid: Option<bool>,
        /// Navigation position (combo, vertical, top)
        #[arg(long)]
        nav_position: Option<NavPosition>,
        /// Side navigation style (default, darker, vibrant)
        #[arg(long)]
        vnav_style: Option<VnavStyle>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrefsView {
    sidebar_collapsed: bool,
    view_mode: ViewMode,
    #[serde(flatten)]
    layout: LayoutPrefs,
}

/// Execute prefs commands
pub fn execute(args: &PrefsArgs, ctx: &AppContext, format: OutputFormat) -> Result<(), AppError> {
    let prefs = &ctx.preferences;
    match &args.command {
        PrefsCommand::Show => {}
        PrefsCommand::Set {
            sidebar_collapsed,
            view_mode,
            theme,
            fluid,
            nav_position,
            vnav_style,
        } => {
            if let Some(collapsed) = sidebar_collapsed {
                prefs.set_sidebar_collapsed(*collapsed)?;
            }
            if let Some(mode) = view_mode {
                prefs.set_view_mode(*mode)?;
            }
            if theme.is_some() || fluid.is_some() || nav_position.is_some() || vnav_style.is_some() {
                prefs.update_layout(|layout| {
                    if let Some(theme) = theme {
                        layout.theme_mode = *theme;
                    }
                    if let Some(fluid) = fluid {
                        layout.fluid = *fluid;
                    }
                    if let Some(position) = nav_position {
                        layout.nav_position = *position;
                    }
                    if let Some(style) = vnav_style {
                        layout.vnav_style = *style;
                    }
                })?;
            }
            output::print_success("Preferences saved");
        }
    }

    let view = PrefsView {
        sidebar_collapsed: prefs.sidebar_collapsed(),
        view_mode: prefs.view_mode(),
        layout: prefs.layout(),
    };
    output::print_item(&view, format);
    Ok(())
}
