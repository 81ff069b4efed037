//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Data assets are loaded at compile time using `include_str!`.

use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::core::TrailPolicy;
use crate::models::ViewType;

// =============================================================================
// Assets (loaded at compile time)
// =============================================================================

/// Demo drive contents shown on startup.
pub const SAMPLE_DATASET: &str = include_str!("../assets/data/drive.json");

/// Default browser settings.
pub const DEFAULT_BROWSER_CONFIG: &str = include_str!("../assets/config/browser.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "Drive";

/// Id of the root folder when a dataset does not name one.
pub const ROOT_ID: &str = "root";

/// Root display name used by the fallback store.
pub const DEFAULT_ROOT_NAME: &str = "My Drive";

// =============================================================================
// Notifications
// =============================================================================

/// Prefix for the simulated file-open notification.
pub const OPEN_FILE_PREFIX: &str = "Opening file: ";

/// Shown after the upload form is submitted.
pub const UPLOAD_SIMULATED_MESSAGE: &str =
    "File upload simulated! In a real app, this would upload your files.";

/// Placeholder for columns that do not apply to folders.
pub const EMPTY_COLUMN: &str = "\u{2014}";

// =============================================================================
// Logging
// =============================================================================

/// Level used when neither the config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Browser Configuration
// =============================================================================

/// Runtime settings for the drive browser.
///
/// Parsed from TOML; every key is optional.
///
/// ```toml
/// view_type = "grid"
/// trail_policy = "permissive"
/// log_level = "debug"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Initial listing presentation
    pub view_type: ViewType,
    /// How forward navigation to a folder off the trail is validated
    pub trail_policy: TrailPolicy,
    /// Tracing filter directive (e.g. "info", "drive_ui=debug")
    pub log_level: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            view_type: ViewType::default(),
            trail_policy: TrailPolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BrowserConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Bundled configuration, falling back to defaults if it does not parse.
    pub fn bundled() -> Self {
        Self::from_toml(DEFAULT_BROWSER_CONFIG).unwrap_or_else(|err| {
            tracing::warn!(%err, "using default browser config");
            Self::default()
        })
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
