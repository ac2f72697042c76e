// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the gesture and transform state of the viewer,
//! kept apart from the widgets that render it.

pub mod drag;
pub mod touch;
pub mod transform;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use touch::TouchState;
pub use transform::{GestureDelta, RenderTransform, ZoomTransformState};
