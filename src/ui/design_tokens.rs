// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and radius used by the portfolio page.

## Organization

- **Palette**: Base colors (slate surfaces, blue brand, card accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Slate scale
    pub const SLATE_50: Color = Color::from_rgb(0.973, 0.980, 0.988); // #f8fafc
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976); // #f1f5f9
    pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941); // #e2e8f0
    pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722); // #94a3b8
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545); // #64748b
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333); // #334155
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231); // #1e293b
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165); // #0f172a

    // Brand (blue)
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // #60a5fa
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3b82f6
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // #2563eb

    // Card accents
    pub const GREEN_500: Color = Color::from_rgb(0.063, 0.725, 0.506); // #10b981
    pub const PURPLE_500: Color = Color::from_rgb(0.659, 0.333, 0.969); // #a855f7
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.043); // #f59e0b

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // #ef4444
    pub const WARNING_500: Color = AMBER_500;
    pub const SUCCESS_500: Color = GREEN_500;
    pub const INFO_500: Color = PRIMARY_500;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SUBTLE: f32 = 0.1;
    pub const MUTED: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.85;
    /// Modal backdrop behind the enlarged picture.
    pub const BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Sticky navbar over scrolled content.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    /// Vertical padding around each page section.
    pub const SECTION: f32 = 80.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const BUTTON_HEIGHT: f32 = 40.0;

    /// Maximum width of the centered page column.
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

    pub const CARD_MIN_WIDTH: f32 = 260.0;
    pub const STAT_MIN_HEIGHT: f32 = 110.0;

    // Carousel
    pub const CAROUSEL_HEIGHT: f32 = 420.0;
    pub const CAROUSEL_ARROW: f32 = 44.0;
    pub const INDICATOR: f32 = 10.0;
    pub const INDICATOR_ACTIVE_WIDTH: f32 = 28.0;

    pub const TIMELINE_DOT: f32 = 14.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes from the hero headline down to captions.

    /// Hero headline.
    pub const DISPLAY: f32 = 48.0;

    /// Counter values and section titles.
    pub const TITLE_LG: f32 = 32.0;

    /// Navbar logo, card titles.
    pub const TITLE_MD: f32 = 20.0;

    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Chips, badges, footer.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Timeline rail and card accent edges.
    pub const WIDTH_MD: f32 = 2.0;
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.5,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 30.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);

    assert!(sizing::INDICATOR_ACTIVE_WIDTH > sizing::INDICATOR);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
