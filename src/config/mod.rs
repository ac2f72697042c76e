// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[display]` - Viewer background and HUD
//! - `[gestures]` - Wheel zoom factor and touch slop
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `PINCH_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pinch_lens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("wheel zoom factor: {}", config.gestures.wheel_zoom_factor());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    Light,
    #[default]
    Dark,
    Checkerboard,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Viewer display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Background drawn behind the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundTheme>,

    /// Whether the zoom/offset HUD is visible.
    #[serde(default = "default_show_hud", skip_serializing_if = "Option::is_none")]
    pub show_hud: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            background: Some(BackgroundTheme::default()),
            show_hud: default_show_hud(),
        }
    }
}

/// Gesture tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Zoom factor applied per mouse-wheel line.
    #[serde(
        default = "default_wheel_zoom_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_factor: Option<f32>,

    /// Touch slop in pixels.
    #[serde(default = "default_touch_slop", skip_serializing_if = "Option::is_none")]
    pub touch_slop: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            wheel_zoom_factor: default_wheel_zoom_factor(),
            touch_slop: default_touch_slop(),
        }
    }
}

impl GestureConfig {
    /// Returns the configured wheel zoom factor, or the default when the
    /// stored value is missing, non-finite or not strictly positive.
    #[must_use]
    pub fn wheel_zoom_factor(&self) -> f32 {
        self.wheel_zoom_factor
            .filter(|f| f.is_finite() && *f > 0.0)
            .unwrap_or(DEFAULT_WHEEL_ZOOM_FACTOR)
    }

    /// Returns the configured touch slop, or the default when the stored
    /// value is missing, non-finite or negative.
    #[must_use]
    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
            .filter(|s| s.is_finite() && *s >= 0.0)
            .unwrap_or(DEFAULT_TOUCH_SLOP)
    }

    /// Describes the first out-of-range value, if any.
    fn validation_warning(&self) -> Option<String> {
        if let Some(factor) = self.wheel_zoom_factor {
            if !(factor.is_finite() && factor > 0.0) {
                return Some(format!(
                    "gestures.wheel_zoom_factor = {factor} is invalid, using {DEFAULT_WHEEL_ZOOM_FACTOR}"
                ));
            }
        }
        if let Some(slop) = self.touch_slop {
            if !(slop.is_finite() && slop >= 0.0) {
                return Some(format!(
                    "gestures.touch_slop = {slop} is invalid, using {DEFAULT_TOUCH_SLOP}"
                ));
            }
        }
        None
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Gesture settings.
    #[serde(default)]
    pub gestures: GestureConfig,
}

impl Config {
    #[must_use]
    pub fn background(&self) -> BackgroundTheme {
        self.display.background.unwrap_or_default()
    }

    #[must_use]
    pub fn show_hud(&self) -> bool {
        self.display.show_hud.unwrap_or(DEFAULT_SHOW_HUD)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_show_hud() -> Option<bool> {
    Some(DEFAULT_SHOW_HUD)
}

fn default_wheel_zoom_factor() -> Option<f32> {
    Some(DEFAULT_WHEEL_ZOOM_FACTOR)
}

fn default_touch_slop() -> Option<f32> {
    Some(DEFAULT_TOUCH_SLOP)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            let warning = config.gestures.validation_warning();
            (config, warning)
        }
        Err(error) => (
            Config::default(),
            Some(format!("{}: {error}", path.display())),
        ),
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read and
/// [`crate::error::Error::Config`] if it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
