// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode
//! - `[gallery]` - Photos directory, sort order, grid layout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `KAMERAVUE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use kameravue::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gallery.sort_order = Some(config::SortOrder::ModifiedNewest);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning shown as a toast when the config file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str =
    "Settings file could not be read, defaults are in effect";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Photo ordering within the gallery grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedNewest,
    ModifiedOldest,
}

impl SortOrder {
    /// All orderings, in the order they appear in the sort picker.
    pub const ALL: [SortOrder; 3] = [
        SortOrder::Alphabetical,
        SortOrder::ModifiedNewest,
        SortOrder::ModifiedOldest,
    ];
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SortOrder::Alphabetical => "Name",
            SortOrder::ModifiedNewest => "Newest first",
            SortOrder::ModifiedOldest => "Oldest first",
        };
        write!(f, "{label}")
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory scanned for photos on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos_dir: Option<PathBuf>,

    /// Photo sorting order in the grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Number of thumbnail columns in the grid.
    #[serde(
        default = "default_grid_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_columns: Option<u16>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photos_dir: None,
            sort_order: Some(SortOrder::default()),
            grid_columns: Some(DEFAULT_GRID_COLUMNS),
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

    /// Gallery settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Returns the grid column count clamped to the supported range.
    #[must_use]
    pub fn grid_columns(&self) -> u16 {
        self.gallery
            .grid_columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_grid_columns() -> Option<u16> {
    Some(DEFAULT_GRID_COLUMNS)
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
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
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                photos_dir: Some(PathBuf::from("/home/user/Pictures")),
                sort_order: Some(SortOrder::ModifiedNewest),
                grid_columns: Some(6),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(
            loaded.gallery.photos_dir,
            Some(PathBuf::from("/home/user/Pictures"))
        );
        assert_eq!(loaded.gallery.sort_order, Some(SortOrder::ModifiedNewest));
        assert_eq!(loaded.gallery.grid_columns, Some(6));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert!(config.gallery.photos_dir.is_none());
        assert_eq!(config.gallery.sort_order, Some(SortOrder::Alphabetical));
        assert_eq!(config.gallery.grid_columns, Some(DEFAULT_GRID_COLUMNS));
    }

    #[test]
    fn grid_columns_are_clamped() {
        let mut config = Config::default();

        config.gallery.grid_columns = Some(1);
        assert_eq!(config.grid_columns(), MIN_GRID_COLUMNS);

        config.gallery.grid_columns = Some(99);
        assert_eq!(config.grid_columns(), MAX_GRID_COLUMNS);

        config.gallery.grid_columns = None;
        assert_eq!(config.grid_columns(), DEFAULT_GRID_COLUMNS);
    }

    #[test]
    fn sort_order_uses_kebab_case_on_disk() {
        let config = Config {
            gallery: GalleryConfig {
                sort_order: Some(SortOrder::ModifiedOldest),
                ..GalleryConfig::default()
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("modified-oldest"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            gallery: GalleryConfig {
                photos_dir: Some(PathBuf::from("/photos")),
                sort_order: Some(SortOrder::ModifiedOldest),
                grid_columns: Some(3),
            },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.gallery.grid_columns, Some(3));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn multiple_isolated_config_tests_dont_interfere() {
        let temp_dir_a = tempdir().expect("create temp dir A");
        let config_a = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            ..Config::default()
        };
        save_with_override(&config_a, Some(temp_dir_a.path().to_path_buf()))
            .expect("save A should succeed");

        let temp_dir_b = tempdir().expect("create temp dir B");
        let config_b = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };
        save_with_override(&config_b, Some(temp_dir_b.path().to_path_buf()))
            .expect("save B should succeed");

        let (loaded_a, _) = load_with_override(Some(temp_dir_a.path().to_path_buf()));
        let (loaded_b, _) = load_with_override(Some(temp_dir_b.path().to_path_buf()));

        assert_eq!(loaded_a.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded_b.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(
            content.contains("[general]"),
            "should have [general] section"
        );
        assert!(
            content.contains("[gallery]"),
            "should have [gallery] section"
        );
    }
}
