// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes and the persisted theme mode.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the page sections draw with.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub page_background: Color,
    pub surface_muted: Color,
    pub card: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Filled buttons and the active carousel dot
    pub accent: Color,
    pub accent_text: Color,

    // Section backdrops
    pub hero_backdrop: Color,
    pub cta_backdrop: Color,
    pub divider: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::WHITE,
            surface_muted: palette::STONE_50,
            card: palette::WHITE,

            text_primary: palette::STONE_900,
            text_secondary: palette::STONE_700,
            text_muted: palette::STONE_500,

            accent: palette::STONE_900,
            accent_text: palette::WHITE,

            hero_backdrop: palette::CREAM_200,
            cta_backdrop: palette::CREAM_100,
            divider: palette::STONE_200,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::STONE_900,
            surface_muted: palette::STONE_800,
            card: palette::STONE_800,

            text_primary: palette::STONE_50,
            text_secondary: palette::STONE_200,
            text_muted: palette::STONE_500,

            accent: palette::AMBER_200,
            accent_text: palette::STONE_900,

            hero_backdrop: palette::STONE_800,
            cta_backdrop: palette::STONE_700,
            divider: palette::STONE_700,
        }
    }

    /// Picks the scheme matching the active iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
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
            // The page is designed light-first, so detection errors fall back to light.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Header toggle order: light, dark, system, light...
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_white_page() {
        let scheme = ColorScheme::light();
        assert_eq!(scheme.page_background, palette::WHITE);
        assert!(scheme.text_primary.r < 0.2);
    }

    #[test]
    fn dark_scheme_inverts_text() {
        let scheme = ColorScheme::dark();
        assert!(scheme.page_background.r < 0.2);
        assert!(scheme.text_primary.r > 0.9);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(ColorScheme::for_theme(&Theme::Light), ColorScheme::light());
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
    }

    #[test]
    fn theme_mode_cycles_through_all_modes() {
        let mut mode = ThemeMode::Light;
        let mut seen = vec![mode];
        for _ in 0..2 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
        assert_eq!(mode.next(), ThemeMode::Light);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }
}
