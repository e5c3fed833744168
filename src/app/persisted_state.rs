// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles transient application state that should persist across sessions
//! but is not user-configurable (unlike preferences in `settings.toml`).
//!
//! State is stored in CBOR (Concise Binary Object Representation) format for:
//! - Compact binary storage
//! - Fast serialization/deserialization
//! - Clear separation from user-editable TOML preferences
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable deployments:
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `KAMERAVUE_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
///
/// This struct contains transient state that improves UX but is not
/// user-configurable. It is stored separately from user preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory opened as the photo library.
    /// Used as the initial directory for the folder picker and rescanned
    /// on startup.
    #[serde(default)]
    pub last_photos_directory: Option<PathBuf>,

    /// Username pre-filled on the sign-in screen.
    #[serde(default)]
    pub remembered_username: Option<String>,

    /// Paths of photos marked as favorites.
    /// A BTreeSet keeps the on-disk encoding stable across saves.
    #[serde(default)]
    pub favorites: BTreeSet<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning message explaining what went wrong.
    /// The warning can be displayed to the user via notifications.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default path resolution.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("Saved session state could not be parsed".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("Saved session state could not be read".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns an optional warning message if save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default path resolution.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("No writable location for session state".to_string());
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("Could not create the session state directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("Session state could not be written".to_string());
                }
                None
            }
            Err(_) => Some("Session state file could not be created".to_string()),
        }
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Marks or unmarks a photo as favorite. Returns the new status.
    pub fn toggle_favorite(&mut self, path: &std::path::Path) -> bool {
        if self.favorites.remove(path) {
            false
        } else {
            self.favorites.insert(path.to_path_buf());
            true
        }
    }

    /// Returns whether the given photo is marked as favorite.
    #[must_use]
    pub fn is_favorite(&self, path: &std::path::Path) -> bool {
        self.favorites.contains(path)
    }
}
