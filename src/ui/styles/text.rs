// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::{Color, Theme};

pub fn primary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::of(theme).text_primary),
    }
}

/// Labels, dates and other supporting text.
pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::of(theme).text_secondary),
    }
}

pub fn brand(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::of(theme).brand_primary),
    }
}

/// Brand color when `highlight` is set, primary text color otherwise.
pub fn emphasis(highlight: bool) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        if highlight {
            brand(theme)
        } else {
            primary(theme)
        }
    }
}

/// Fixed color, independent of the theme.
pub fn fixed(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style { color: Some(color) }
}
