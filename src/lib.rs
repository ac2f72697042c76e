// SPDX-License-Identifier: MPL-2.0
//! `pinch_lens` is a zoomable image viewer built with the Iced GUI framework.
//!
//! Pinch and drag gestures (or the mouse wheel and a click-drag) accumulate
//! into a single zoom/pan transform that is applied to the displayed image.

#![doc(html_root_url = "https://docs.rs/pinch_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
