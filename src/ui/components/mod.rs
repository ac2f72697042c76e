// SPDX-License-Identifier: MPL-2.0
//! Reusable drawing helpers.
//!
//! - [`checkerboard`] - Transparency checkerboard painted behind images

pub mod checkerboard;
