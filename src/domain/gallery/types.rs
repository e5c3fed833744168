// SPDX-License-Identifier: MPL-2.0
//! Core gallery types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// A photo in the gallery.
///
/// Pure metadata about a photo file. Pixel data is loaded separately by
/// the media layer once the photo becomes visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    /// Absolute path to the image file.
    path: PathBuf,
    /// Display title, derived from the file stem.
    title: String,
    /// File modification time, used for sorting and date filtering.
    modified: SystemTime,
}

impl Photo {
    /// Creates a new `Photo` from a path and its modification time.
    ///
    /// The title is derived from the file stem; a path without one (such
    /// as `..`) falls back to the full file name or an empty title.
    #[must_use]
    pub fn new(path: PathBuf, modified: SystemTime) -> Self {
        let title = path
            .file_stem()
            .or_else(|| path.file_name())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            title,
            modified,
        }
    }

    /// Returns the path to the image file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the file modification time.
    #[must_use]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// Raw image data without presentation dependencies.
///
/// This is the domain representation of an image, containing only the
/// pure pixel data. Presentation layer converts this to framework-specific
/// handles (e.g., `iced::widget::image::Handle`).
///
/// # Example
///
/// ```
/// use kameravue::domain::gallery::RawImage;
/// use std::sync::Arc;
///
/// let pixels = vec![255u8; 100 * 100 * 4]; // 100x100 RGBA
/// let image = RawImage::new(100, 100, Arc::new(pixels));
///
/// assert_eq!(image.width(), 100);
/// assert_eq!(image.height(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct RawImage {
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a new `RawImage` from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns the shared reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes_arc(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.rgba_bytes)
    }

    /// Returns the total number of pixels.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

impl PartialEq for RawImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RawImage {}
