// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes, and their conversion into an iced [`Theme`].

use crate::ui::design_tokens::{opacity, palette};
use iced::{theme, Color, Theme};
use serde::Deserialize;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::SLATE_50,
            surface_secondary: palette::WHITE,
            surface_tertiary: palette::SLATE_200,

            text_primary: palette::SLATE_900,
            text_secondary: palette::SLATE_500,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::SLATE_900
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::SLATE_900,
            surface_secondary: palette::SLATE_800,
            surface_tertiary: palette::SLATE_700,

            text_primary: palette::SLATE_100,
            text_secondary: palette::SLATE_400,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Scheme matching an iced theme produced by [`AppTheme::to_iced`].
    #[must_use]
    pub fn of(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Resolved theme for the running application.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// System mode asks the desktop and falls back to dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    /// Builds the iced theme the whole window is drawn with.
    #[must_use]
    pub fn to_iced(&self) -> Theme {
        let is_dark = self.colors.surface_primary.r < 0.5;
        let mut base = if is_dark {
            theme::Palette::DARK
        } else {
            theme::Palette::LIGHT
        };
        base.background = self.colors.surface_primary;
        base.text = self.colors.text_primary;
        base.primary = self.colors.brand_primary;
        base.success = self.colors.success;
        base.danger = self.colors.error;

        let name = if is_dark { "Folio Dark" } else { "Folio Light" };
        Theme::custom(name.to_string(), base)
    }
}
