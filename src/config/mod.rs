// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[editor]` - Filter parameters, preview canvas and initial slider values
//! - `[export]` - Output format and JPEG quality
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `FILTER_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use filter_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration to the resolved settings directory
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::editing::{BlurSigma, EnhanceFactor};
use crate::error::{Error, Result};
use crate::media::codec::ExportFormat;
use crate::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing settings file cannot be read.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Preview theme mode (light, dark, or system).
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

/// Editing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Gaussian blur sigma used by the smoothing filter.
    #[serde(default = "default_blur_sigma", skip_serializing_if = "Option::is_none")]
    pub blur_sigma: Option<f32>,

    /// Preview canvas width in pixels.
    #[serde(
        default = "default_preview_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_width: Option<u32>,

    /// Preview canvas height in pixels.
    #[serde(
        default = "default_preview_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_height: Option<u32>,

    /// Initial brightness slider value.
    #[serde(
        default = "default_enhance_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_brightness: Option<f32>,

    /// Initial contrast slider value.
    #[serde(
        default = "default_enhance_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_contrast: Option<f32>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            blur_sigma: default_blur_sigma(),
            preview_width: default_preview_size(),
            preview_height: default_preview_size(),
            default_brightness: default_enhance_factor(),
            default_contrast: default_enhance_factor(),
        }
    }
}

impl EditorConfig {
    /// Blur sigma, falling back to the default and clamped to the valid range.
    #[must_use]
    pub fn blur_sigma(&self) -> BlurSigma {
        self.blur_sigma.map(BlurSigma::new).unwrap_or_default()
    }

    /// Preview canvas size clamped to the supported range.
    #[must_use]
    pub fn preview_size(&self) -> (u32, u32) {
        let clamp = |value: Option<u32>| {
            value
                .unwrap_or(DEFAULT_PREVIEW_SIZE)
                .clamp(MIN_PREVIEW_SIZE, MAX_PREVIEW_SIZE)
        };
        (clamp(self.preview_width), clamp(self.preview_height))
    }

    #[must_use]
    pub fn brightness(&self) -> EnhanceFactor {
        self.default_brightness
            .map(EnhanceFactor::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contrast(&self) -> EnhanceFactor {
        self.default_contrast
            .map(EnhanceFactor::new)
            .unwrap_or_default()
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Output format used when the destination has no recognizable extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ExportFormat>,

    /// JPEG quality (1-100).
    #[serde(
        default = "default_jpeg_quality",
        skip_serializing_if = "Option::is_none"
    )]
    pub jpeg_quality: Option<u8>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: Some(ExportFormat::default()),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn format(&self) -> ExportFormat {
        self.format.unwrap_or_default()
    }

    /// JPEG quality clamped to 1..=100.
    #[must_use]
    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
            .unwrap_or(DEFAULT_JPEG_QUALITY)
            .clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
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

    /// Editing settings.
    #[serde(default)]
    pub editor: EditorConfig,

    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_blur_sigma() -> Option<f32> {
    Some(DEFAULT_BLUR_SIGMA)
}

fn default_preview_size() -> Option<u32> {
    Some(DEFAULT_PREVIEW_SIZE)
}

fn default_enhance_factor() -> Option<f32> {
    Some(EnhanceFactor::default().value())
}

fn default_jpeg_quality() -> Option<u8> {
    Some(DEFAULT_JPEG_QUALITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
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
// Save Functions
// =============================================================================

/// Saves the configuration to `base_dir`, or to the resolved settings
/// directory when `None`.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no settings directory available".to_string()))?;
    save_to_path(config, &path)?;
    tracing::debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
