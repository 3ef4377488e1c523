// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Colors come from the [`ColorScheme`] matching the active theme so the same
//! style functions work in light and dark mode.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled pill: "Book", "Contact" and "Watch" actions.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_STRONG + 0.15,
            ..colors.accent
        },
        _ => colors.accent,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.accent_text,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Pressed) {
            shadow::MD
        } else {
            shadow::LG
        },
        snap: true,
    }
}

/// Outlined pill that fills on hover: the header "Book" button.
pub fn outlined(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(colors.accent)), colors.accent_text)
        }
        _ => (None, colors.text_primary),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: colors.text_primary,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text link: navigation entries and "Watch clip".
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.text_secondary,
        _ => colors.text_primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round arrow control beside the video slideshow.
pub fn arrow(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.surface_muted,
        _ => colors.card,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_primary,
        border: Border {
            color: colors.divider,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Carousel dot. The selected dot uses the accent color.
pub fn dot(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let color = if selected {
            colors.accent
        } else if matches!(status, button::Status::Hovered) {
            colors.text_secondary
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..colors.text_muted
            }
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: colors.accent_text,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
