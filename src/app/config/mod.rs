// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[content]` - Site content manifest and asset directory
//! - `[carousel]` - Rotation intervals and motion preferences
//! - `[sections]` - Which rotating sections are shown
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PODIUM_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use podium::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::rotation::TickInterval;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Where the page content comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Site manifest (TOML). The embedded manifest is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// Directory that image file names resolve against. Defaults to the
    /// manifest's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_dir: Option<PathBuf>,
}

/// Rotation timing and motion preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Period between gallery advances (milliseconds).
    #[serde(
        default = "default_gallery_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub gallery_interval_ms: Option<u64>,

    /// Period between testimonial advances (milliseconds).
    #[serde(
        default = "default_testimonial_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub testimonial_interval_ms: Option<u64>,

    /// Skip enter/exit transitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_motion: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gallery_interval_ms: default_gallery_interval_ms(),
            testimonial_interval_ms: default_testimonial_interval_ms(),
            reduce_motion: Some(false),
        }
    }
}

impl CarouselConfig {
    /// Gallery interval, clamped to the supported range.
    #[must_use]
    pub fn gallery_interval(&self) -> TickInterval {
        TickInterval::new(
            self.gallery_interval_ms
                .unwrap_or(DEFAULT_GALLERY_INTERVAL_MS),
        )
    }

    /// Testimonial interval, clamped to the supported range.
    #[must_use]
    pub fn testimonial_interval(&self) -> TickInterval {
        TickInterval::new(
            self.testimonial_interval_ms
                .unwrap_or(DEFAULT_TESTIMONIAL_INTERVAL_MS),
        )
    }
}

/// Which rotating sections are allowed to mount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionsConfig {
    #[serde(default = "enabled")]
    pub gallery: bool,
    #[serde(default = "enabled")]
    pub videos: bool,
    #[serde(default = "enabled")]
    pub testimonials: bool,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            gallery: true,
            videos: true,
            testimonials: true,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Site content location.
    #[serde(default)]
    pub content: ContentConfig,

    /// Rotation timing.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Section toggles.
    #[serde(default)]
    pub sections: SectionsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_gallery_interval_ms() -> Option<u64> {
    Some(DEFAULT_GALLERY_INTERVAL_MS)
}

fn default_testimonial_interval_ms() -> Option<u64> {
    Some(DEFAULT_TESTIMONIAL_INTERVAL_MS)
}

fn enabled() -> bool {
    true
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "falling back to default settings"
                    );
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            content: ContentConfig {
                manifest: Some(PathBuf::from("/srv/site/site.toml")),
                asset_dir: None,
            },
            carousel: CarouselConfig {
                gallery_interval_ms: Some(4000),
                testimonial_interval_ms: Some(9000),
                reduce_motion: Some(true),
            },
            sections: SectionsConfig {
                gallery: true,
                videos: false,
                testimonials: true,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.carousel, CarouselConfig::default());
        assert_eq!(loaded.sections, SectionsConfig::default());
    }

    #[test]
    fn partial_sections_table_keeps_other_sections_enabled() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[sections]\ngallery = false\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load config");
        assert!(!loaded.sections.gallery);
        assert!(loaded.sections.videos);
        assert!(loaded.sections.testimonials);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn carousel_intervals_are_clamped() {
        let carousel = CarouselConfig {
            gallery_interval_ms: Some(5),
            testimonial_interval_ms: None,
            reduce_motion: None,
        };
        assert_eq!(carousel.gallery_interval().millis(), MIN_TICK_INTERVAL_MS);
        assert_eq!(
            carousel.testimonial_interval().millis(),
            DEFAULT_TESTIMONIAL_INTERVAL_MS
        );
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[carousel\n").expect("write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());

        let (loaded, _) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }
}
