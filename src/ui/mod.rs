// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Zoomable image viewer
//! - [`state`] - Gesture and transform state (zoom, pan, touch, drag)
//! - [`components`] - Drawing helpers (checkerboard)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod state;
pub mod theming;
pub mod viewer;
