// SPDX-License-Identifier: MPL-2.0
//! Image sources for the viewer.

pub mod image;

pub use image::{load_image, sample_image, ImageData};
