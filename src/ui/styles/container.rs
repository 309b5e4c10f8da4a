// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::content::Accent;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Color tied to a card accent.
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => palette::PRIMARY_500,
        Accent::Green => palette::GREEN_500,
        Accent::Purple => palette::PURPLE_500,
        Accent::Amber => palette::AMBER_500,
    }
}

/// Whole-page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Band behind alternating page sections.
pub fn band(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        ..Default::default()
    }
}

/// Sticky navbar over the scrolled page.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..colors.surface_primary
        })),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Raised card; the accent colors its outline.
pub fn card(accent: Option<Accent>) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        container::Style {
            background: Some(Background::Color(colors.surface_secondary)),
            border: Border {
                color: accent.map_or(colors.surface_tertiary, accent_color),
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Small rounded label for technologies and badges.
pub fn chip(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_secondary),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Hero badge, tinted with the brand color.
pub fn badge(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SUBTLE,
            ..colors.brand_primary
        })),
        text_color: Some(colors.brand_primary),
        border: Border {
            color: Color {
                a: opacity::MUTED,
                ..colors.brand_primary
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Timeline marker; the current position is filled.
pub fn timeline_dot(current: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::of(theme);
        let fill = if current {
            colors.brand_primary
        } else {
            colors.surface_tertiary
        };
        container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                color: colors.surface_primary,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Frame holding the carousel picture.
pub fn media_frame(theme: &Theme) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Stand-in drawn when a picture cannot be shown.
pub fn media_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_800)),
        text_color: Some(palette::SLATE_400),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed layer behind the enlarged picture.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::of(theme).backdrop)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Caption strip of the modal.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
