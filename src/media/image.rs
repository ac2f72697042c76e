// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding, plus the built-in sample image.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::{GenericImageView, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Width of the generated sample image.
pub const SAMPLE_WIDTH: u32 = 640;
/// Height of the generated sample image.
pub const SAMPLE_HEIGHT: u32 = 480;
/// Grid spacing of the sample image, in pixels.
const SAMPLE_GRID: u32 = 40;

/// Decoded image ready to be drawn.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// File the image was decoded from; `None` for the built-in sample.
    pub source: Option<PathBuf>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
            source: None,
        }
    }

    /// Pixel dimensions as an Iced size.
    #[must_use]
    pub fn size(&self) -> Size {
        #[allow(clippy::cast_precision_loss)]
        Size::new(self.width as f32, self.height as f32)
    }

    /// File name to show in the window title.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        self.source
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// Load an image from the given path and return its data.
///
/// Supports the raster formats enabled on the `image` crate (PNG, JPEG, GIF,
/// TIFF, WebP, BMP, ICO).
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The bytes are not a supported image ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }

    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData {
        source: Some(path.to_path_buf()),
        ..ImageData::from_rgba(width, height, pixels)
    })
}

/// Generates the image shown when no file was given: a diagonal color
/// gradient with a grid, so zoom and pan are easy to see.
#[must_use]
pub fn sample_image() -> ImageData {
    let rgba = sample_pixels(SAMPLE_WIDTH, SAMPLE_HEIGHT);
    ImageData::from_rgba(SAMPLE_WIDTH, SAMPLE_HEIGHT, rgba.into_raw())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sample_pixels(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if x % SAMPLE_GRID == 0 || y % SAMPLE_GRID == 0 {
            return Rgba([255, 255, 255, 255]);
        }
        let fx = x as f32 / width as f32;
        let fy = y as f32 / height as f32;
        Rgba([
            (fx * 255.0) as u8,
            (fy * 255.0) as u8,
            ((1.0 - fx) * 200.0 + 55.0) as u8,
            255,
        ])
    })
}
