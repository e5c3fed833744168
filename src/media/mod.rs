// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from common raster formats (PNG, JPEG, GIF, etc.).

use crate::domain::gallery::RawImage;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded image ready for display.
///
/// Pairs the framework [`image::Handle`] with the domain [`RawImage`]
/// the handle was built from, so the original pixels remain available.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    raw: RawImage,
}

impl ImageData {
    /// Creates a new `ImageData` from a decoded domain image.
    ///
    /// A copy of the pixels is made for the Handle; the `RawImage`
    /// keeps shared ownership of the original bytes.
    #[must_use]
    pub fn from_raw(raw: RawImage) -> Self {
        let handle = image::Handle::from_rgba(raw.width(), raw.height(), raw.rgba_bytes().to_vec());
        Self {
            handle,
            width: raw.width(),
            height: raw.height(),
            raw,
        }
    }

    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::from_raw(RawImage::from_rgba(width, height, pixels))
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        self.raw.rgba_bytes()
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;

    let img =
        image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Image(e.to_string()))?;

    let (width, height) = img.dimensions();

    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
