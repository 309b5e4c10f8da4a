// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled call to action ("View Experience").
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let background = match status {
        button::Status::Hovered => colors.brand_secondary,
        button::Status::Disabled => colors.surface_tertiary,
        button::Status::Active | button::Status::Pressed => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Bordered secondary action ("Contact Me").
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    let (background, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(colors.surface_secondary)), colors.brand_primary)
        }
        _ => (None, colors.surface_tertiary),
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar entry; the active section is drawn with the brand color.
pub fn nav(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let text_color = if active || status == button::Status::Hovered {
            colors.brand_primary
        } else {
            colors.text_secondary
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round previous/next arrows laid over the carousel picture.
pub fn carousel_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::BACKDROP,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::SLATE_900
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Position dot under the carousel.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::of(theme);
        let color = if active {
            colors.brand_primary
        } else if status == button::Status::Hovered {
            colors.text_secondary
        } else {
            colors.surface_tertiary
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Text link in the footer and hero.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::of(theme);
    button::Style {
        background: None,
        text_color: if status == button::Status::Hovered {
            colors.brand_primary
        } else {
            colors.text_secondary
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Picture area of the carousel, clickable to enlarge.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::{AppTheme, ThemeMode};

    fn dark() -> Theme {
        AppTheme::new(ThemeMode::Dark).to_iced()
    }

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&dark(), button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::dark().brand_primary))
        );
    }

    #[test]
    fn active_nav_entry_is_highlighted() {
        let theme = dark();
        let active = nav(true)(&theme, button::Status::Active);
        let idle = nav(false)(&theme, button::Status::Active);
        assert_eq!(active.text_color, ColorScheme::dark().brand_primary);
        assert_ne!(active.text_color, idle.text_color);
    }

    #[test]
    fn active_indicator_differs_from_idle() {
        let theme = dark();
        let active = indicator(true)(&theme, button::Status::Active);
        let idle = indicator(false)(&theme, button::Status::Active);
        assert_ne!(active.background, idle.background);
    }

    #[test]
    fn carousel_arrow_darkens_on_hover() {
        let theme = dark();
        let normal = carousel_arrow(&theme, button::Status::Active);
        let hover = carousel_arrow(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
