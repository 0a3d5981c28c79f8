//! Plain-text UI preferences, read with safe defaults.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use ims_core::error::AppError;
use ims_core::result::AppResult;
use ims_core::traits::storage::LocalStorage;
use ims_storage::keys;

/// How the product list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card grid.
    #[default]
    Grid,
    /// Dense table.
    Table,
}

/// Colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the OS.
    #[default]
    Auto,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

/// Where the navigation bar sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    /// Side plus top.
    #[default]
    Combo,
    /// Side only.
    Vertical,
    /// Top only.
    Top,
}

/// Side navigation colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VnavStyle {
    /// Theme default.
    #[default]
    Default,
    /// Darker panel.
    Darker,
    /// Accent-coloured panel.
    Vibrant,
}

/// The `ui-prefs-v1` layout record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPrefs {
    /// Colour scheme.
    pub theme_mode: ThemeMode,
    /// Full-width container.
    pub fluid: bool,
    /// Navigation placement.
    pub nav_position: NavPosition,
    /// Side navigation style.
    pub vnav_style: VnavStyle,
}

macro_rules! lowercase_from_str {
    ($($ty:ty),*) => {$(
        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                serde_json::from_value(Value::String(s.trim().to_lowercase()))
                    .map_err(|_| AppError::validation(format!("Unknown value '{s}'")))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match serde_json::to_value(self) {
                    Ok(Value::String(s)) => f.write_str(&s),
                    _ => Err(fmt::Error),
                }
            }
        }
    )*};
}

lowercase_from_str!(ViewMode, ThemeMode, NavPosition, VnavStyle);

/// Reads and writes preferences in local storage.
#[derive(Debug, Clone)]
pub struct UiPreferences {
    storage: Arc<dyn LocalStorage>,
}

impl UiPreferences {
    /// Creates a preference accessor over `storage`.
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    /// Whether the sidebar is collapsed; `false` unless stored as `true`.
    pub fn sidebar_collapsed(&self) -> bool {
        self.read(keys::SIDEBAR_COLLAPSED).as_deref() == Some("true")
    }

    /// Persist the sidebar state.
    pub fn set_sidebar_collapsed(&self, collapsed: bool) -> AppResult<()> {
        self.storage
            .set_item(keys::SIDEBAR_COLLAPSED, if collapsed { "true" } else { "false" })
    }

    /// Product view mode; grid unless `table` is stored.
    pub fn view_mode(&self) -> ViewMode {
        match self.read(keys::PRODUCT_VIEW_MODE).as_deref() {
            Some("table") => ViewMode::Table,
            _ => ViewMode::Grid,
        }
    }

    /// Persist the product view mode.
    pub fn set_view_mode(&self, mode: ViewMode) -> AppResult<()> {
        self.storage
            .set_item(keys::PRODUCT_VIEW_MODE, &mode.to_string())
    }

    /// Layout preferences.
    ///
    /// Missing or malformed JSON yields the defaults; fields that are
    /// missing or carry unknown values fall back one by one.
    pub fn layout(&self) -> LayoutPrefs {
        let Some(raw) = self.read(keys::UI_PREFS) else {
            return LayoutPrefs::default();
        };
        let value: Value = match serde_json::from_str(&raw) {
            Ok(Value::Object(map)) => Value::Object(map),
            _ => {
                warn!(key = keys::UI_PREFS, "Malformed layout preferences; using defaults");
                return LayoutPrefs::default();
            }
        };
        let defaults = LayoutPrefs::default();
        LayoutPrefs {
            theme_mode: field(&value, "themeMode", defaults.theme_mode),
            fluid: field(&value, "fluid", defaults.fluid),
            nav_position: field(&value, "navPosition", defaults.nav_position),
            vnav_style: field(&value, "vnavStyle", defaults.vnav_style),
        }
    }

    /// Persist layout preferences.
    pub fn set_layout(&self, prefs: &LayoutPrefs) -> AppResult<()> {
        let raw = serde_json::to_string(prefs)?;
        self.storage.set_item(keys::UI_PREFS, &raw)
    }

    /// Apply `change` to the stored layout and persist the result.
    pub fn update_layout(&self, change: impl FnOnce(&mut LayoutPrefs)) -> AppResult<LayoutPrefs> {
        let mut prefs = self.layout();
        change(&mut prefs);
        self.set_layout(&prefs)?;
        Ok(prefs)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Preference read failed; using default");
                None
            }
        }
    }
}

fn field<T: DeserializeOwned>(value: &Value, name: &str, default: T) -> T {
    value
        .get(name)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or(default)
}
