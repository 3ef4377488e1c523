// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing step, size and radius used by the page lives here.

## Organization

- **Palette**: Stone grays, warm cream accents and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes and fixed section heights
- **Typography**: Font size scale
- **Border / Radius / Shadow**: Card and button chrome

## Examples

```
use podium::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let veil = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::STONE_900
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

    // Warm grays
    pub const STONE_50: Color = Color::from_rgb(0.980, 0.980, 0.976);
    pub const STONE_200: Color = Color::from_rgb(0.906, 0.898, 0.894);
    pub const STONE_500: Color = Color::from_rgb(0.471, 0.443, 0.424);
    pub const STONE_600: Color = Color::from_rgb(0.341, 0.325, 0.306);
    pub const STONE_700: Color = Color::from_rgb(0.267, 0.251, 0.235);
    pub const STONE_800: Color = Color::from_rgb(0.161, 0.145, 0.141);
    pub const STONE_900: Color = Color::from_rgb(0.110, 0.098, 0.090);

    // Hero and call-to-action backdrops
    pub const CREAM_100: Color = Color::from_rgb(1.0, 0.953, 0.831);
    pub const CREAM_200: Color = Color::from_rgb(1.0, 0.937, 0.776);
    pub const AMBER_200: Color = Color::from_rgb(0.992, 0.902, 0.541);
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.043);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Logos sit slightly faded until hovered.
    pub const LOGO_IDLE: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 96.0; // 12 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 28.0;

    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const SCROLL_PROGRESS_HEIGHT: f32 = 3.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1152.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    pub const GALLERY_CARD_WIDTH: f32 = 350.0;
    pub const GALLERY_CARD_HEIGHT: f32 = 240.0;
    pub const LOGO_WIDTH: f32 = 192.0;
    pub const LOGO_HEIGHT: f32 = 96.0;
    pub const KEYNOTE_CARD_WIDTH: f32 = 340.0;
    /// Height budget of one keynote card when cards are stacked on a
    /// narrow window, where title and description wrap to several lines.
    pub const KEYNOTE_CARD_STACKED_HEIGHT: f32 = 240.0;
    pub const VIDEO_STAGE_HEIGHT: f32 = 320.0;
    pub const DOT_SIZE: f32 = 10.0;

    /// Fixed section heights. Anchor offsets are the running sum of these.
    pub mod section {
        pub const HERO: f32 = 560.0;
        pub const LOGOS: f32 = 200.0;
        pub const ABOUT: f32 = 480.0;
        pub const KEYNOTES: f32 = 560.0;
        pub const VIDEOS: f32 = 560.0;
        pub const GALLERY: f32 = 560.0;
        pub const CTA: f32 = 620.0;
        pub const FOOTER: f32 = 120.0;

        /// Heights below the compact breakpoint, for the sections whose
        /// copy wraps to more lines. The others keep their wide height.
        pub mod compact {
            pub const HERO: f32 = 720.0;
            pub const ABOUT: f32 = 780.0;
            pub const VIDEOS: f32 = 620.0;
            pub const GALLERY: f32 = 640.0;
            pub const CTA: f32 = 780.0;
            /// Keynotes without their cards: heading, panel padding and the
            /// band's breathing room. Stacked cards are added per keynote.
            pub const KEYNOTES_CHROME: f32 = 300.0;
        }
    }
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes, from display headline down to footer caption.

    /// Hero headline
    pub const DISPLAY: f32 = 64.0;

    /// Section headings
    pub const TITLE_LG: f32 = 36.0;

    /// Card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Speaker name in the header
    pub const TITLE_SM: f32 = 18.0;

    /// Taglines and quotes
    pub const BODY_LG: f32 = 18.0;

    pub const BODY: f32 = 15.0;

    /// Footer and slide counters
    pub const CAPTION: f32 = 13.0;

    /// Compact menu entries
    pub const MENU: f32 = 24.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Outlined buttons and toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 48.0;
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
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
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

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::LOGO_IDLE > 0.0 && opacity::LOGO_IDLE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::section::GALLERY > sizing::GALLERY_CARD_HEIGHT);
    assert!(sizing::section::VIDEOS > sizing::VIDEO_STAGE_HEIGHT);
};
