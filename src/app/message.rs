// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::library::PhotoLibrary;
use crate::media::ImageData;
use crate::ui::auth;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::profile;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Auth(auth::Message),
    Profile(profile::Message),
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
    /// Result from the native directory picker.
    DirectoryChosen(Option<PathBuf>),
    /// Result from scanning a photos directory.
    LibraryScanned(Result<PhotoLibrary, Error>),
    /// Result from decoding a photo for the detail view.
    PhotoLoaded(Result<ImageData, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional photos directory to scan on startup.
    pub photos_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `KAMERAVUE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `KAMERAVUE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
