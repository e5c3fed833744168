// SPDX-License-Identifier: MPL-2.0
//! Photo library scanner.
//!
//! Scans a directory for supported image formats and sorts the results
//! according to the configured sort order.

use crate::config::SortOrder;
use crate::domain::gallery::Photo;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Image file extensions the gallery can display.
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp", "ico",
];

/// A scanned photo directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoLibrary {
    directory: Option<PathBuf>,
    photos: Vec<Photo>,
}

impl PhotoLibrary {
    /// Creates a new empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a library from an already known directory and photo list.
    /// The photos keep the order they are given in.
    #[must_use]
    pub fn from_parts(directory: PathBuf, photos: Vec<Photo>) -> Self {
        Self {
            directory: Some(directory),
            photos,
        }
    }

    /// Scans `directory` for supported images and sorts them.
    ///
    /// Files whose modification time cannot be read fall back to the
    /// Unix epoch rather than failing the whole scan.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory itself cannot be read.
    pub fn scan(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut photos = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                let modified = entry
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                photos.push(Photo::new(path, modified));
            }
        }

        sort_photos(&mut photos, sort_order);

        Ok(Self {
            directory: Some(directory.to_path_buf()),
            photos,
        })
    }

    /// Re-sorts the library in place.
    pub fn sort(&mut self, sort_order: SortOrder) {
        sort_photos(&mut self.photos, sort_order);
    }

    /// Returns the scanned directory, if any.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Returns the photos in their current order.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Returns the photo with the given path, if present.
    #[must_use]
    pub fn find(&self, path: &Path) -> Option<&Photo> {
        self.photos.iter().find(|p| p.path() == path)
    }

    /// Returns the number of photos found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Checks whether the library has no photos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Checks if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
}

/// Sorts photos according to the specified sort order.
fn sort_photos(photos: &mut [Photo], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            photos.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));
        }
        SortOrder::ModifiedNewest => {
            photos.sort_by(|a, b| b.modified().cmp(&a.modified()));
        }
        SortOrder::ModifiedOldest => {
            photos.sort_by(|a, b| a.modified().cmp(&b.modified()));
        }
    }
}
