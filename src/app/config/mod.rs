// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's configuration from a `settings.toml`
//! file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[counter]` - Count-up animation timing
//! - `[carousel]` - Gallery auto-advance timing
//! - `[content]` - Location of the portfolio content file
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("{key}");
//! }
//! println!("{:?}", config.general.theme_mode);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
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

/// Count-up animation settings for the statistics bar.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CounterConfig {
    /// Default animation duration, used when a stat does not set its own.
    #[serde(default = "default_counter_duration_ms")]
    pub duration_ms: Option<u64>,

    /// Interval between two animation frames.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: Option<u64>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_counter_duration_ms(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

/// Gallery carousel settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Delay between two automatic advances.
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
        }
    }
}

/// Portfolio content location.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Path to a portfolio TOML file. The embedded content is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub counter: CounterConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub content: ContentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_counter_duration_ms() -> Option<u64> {
    Some(DEFAULT_COUNTER_DURATION_MS)
}

fn default_frame_interval_ms() -> Option<u64> {
    Some(DEFAULT_FRAME_INTERVAL_MS)
}

fn default_auto_advance_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_ADVANCE_MS)
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::info!("Loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("Falling back to default settings: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
