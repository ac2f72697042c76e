// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gestures**: Wheel zoom factor and touch slop
//! - **Display**: HUD visibility

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Zoom factor applied per mouse-wheel line (1.1 = +10% per notch).
pub const DEFAULT_WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Pixels per wheel line when the platform reports pixel deltas.
pub const WHEEL_PIXELS_PER_LINE: f32 = 50.0;

/// Finger motion (in pixels) before a touch gesture starts emitting deltas.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Whether the zoom/offset HUD is shown by default.
pub const DEFAULT_SHOW_HUD: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_WHEEL_ZOOM_FACTOR > 1.0);
    assert!(WHEEL_PIXELS_PER_LINE > 0.0);
    assert!(DEFAULT_TOUCH_SLOP >= 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_defaults_are_valid() {
        assert_eq!(DEFAULT_WHEEL_ZOOM_FACTOR, 1.1);
        assert!(WHEEL_PIXELS_PER_LINE > 0.0);
    }

    #[test]
    fn touch_slop_default_is_valid() {
        assert_eq!(DEFAULT_TOUCH_SLOP, 8.0);
    }
}
