// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the colors used for preview sheets.

use image_rs::Rgba;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Base colors.
pub mod palette {
    use image_rs::Rgba;

    pub const LIGHT_SURFACE: Rgba<u8> = Rgba([0xE6, 0xF2, 0xFF, 0xFF]);
    pub const DARK_SURFACE: Rgba<u8> = Rgba([0x20, 0x21, 0x24, 0xFF]);
    pub const CANVAS_BORDER: Rgba<u8> = Rgba([0x8B, 0x45, 0x13, 0xFF]);
}

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub surface: Rgba<u8>,
    pub canvas_border: Rgba<u8>,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::LIGHT_SURFACE,
            canvas_border: palette::CANVAS_BORDER,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::DARK_SURFACE,
            canvas_border: palette::CANVAS_BORDER,
        }
    }

    /// Returns the scheme for the effective appearance of `mode`.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// Flips the effective appearance. `System` resolves to the opposite of
    /// what the system currently reports.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// i18n key naming this mode.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme mode: {other}")),
        }
    }
}
