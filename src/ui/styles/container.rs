// SPDX-License-Identifier: MPL-2.0
//! Container styles for the page and its sections.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn filled(color: Color, text: Color, corner: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(text),
        border: Border {
            radius: corner.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Whole-page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    filled(colors.page_background, colors.text_primary, 0.0)
}

/// Sticky header bar.
pub fn header(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        border: Border {
            color: colors.divider,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..filled(colors.page_background, colors.text_primary, 0.0)
    }
}

/// Filled part of the scroll progress bar under the header.
pub fn scroll_progress(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    filled(colors.accent, colors.accent_text, 0.0)
}

/// Full-screen compact menu.
pub fn menu_overlay(theme: &Theme) -> container::Style {
    page(theme)
}

/// Cream block behind the hero, rounded at the bottom.
pub fn hero(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        border: Border {
            radius: iced::border::Radius::default()
                .bottom_left(radius::XL)
                .bottom_right(radius::XL),
            ..Default::default()
        },
        ..filled(colors.hero_backdrop, colors.text_primary, 0.0)
    }
}

/// Muted rounded panel: the keynote section.
pub fn muted_panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    filled(colors.surface_muted, colors.text_primary, radius::XL)
}

/// Call-to-action panel.
pub fn call_to_action(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    filled(colors.cta_backdrop, colors.text_primary, radius::XL)
}

/// Raised card: keynote topics, video stage, gallery photos.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        shadow: shadow::MD,
        ..filled(colors.card, colors.text_primary, radius::LG)
    }
}

/// Card whose opacity follows a transition, for entering and leaving photos.
pub fn fading_card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let alpha = alpha.clamp(0.0, 1.0);
        container::Style {
            shadow: iced::Shadow {
                color: Color {
                    a: shadow::MD.color.a * alpha,
                    ..shadow::MD.color
                },
                ..shadow::MD
            },
            ..filled(
                Color {
                    a: alpha,
                    ..colors.surface_muted
                },
                Color {
                    a: alpha,
                    ..colors.text_secondary
                },
                radius::LG,
            )
        }
    }
}

/// Footer with a divider above.
pub fn footer(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        border: Border {
            color: colors.divider,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..filled(colors.page_background, colors.text_muted, 0.0)
    }
}
