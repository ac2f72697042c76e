// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan transform state
//!
//! This module holds the two accumulators driven by gestures:
//! - Scale factor, multiplied by every zoom delta
//! - Translation offset, summed with every pan delta
//!
//! Neither value is clamped. Zero, negative or non-finite deltas are applied
//! as-is and show up as a degenerate (collapsed, mirrored or invisible) image.

use iced::{Point, Rectangle, Vector};

/// Initial scale factor of a freshly created viewer.
pub const INITIAL_SCALE: f32 = 1.0;

/// A single incremental update reported by the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureDelta {
    /// Multiplicative zoom factor for one pinch/wheel update.
    Zoom(f32),
    /// Displacement in screen pixels for one drag update.
    Pan(Vector),
}

/// Snapshot of the transform applied to the displayed image.
///
/// The image is scaled uniformly about the center of its layout rectangle,
/// then translated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    pub scale: f32,
    pub translation: Vector,
}

impl RenderTransform {
    /// Identity transform (scale 1, no offset).
    pub const IDENTITY: Self = Self {
        scale: INITIAL_SCALE,
        translation: Vector::ZERO,
    };

    /// Maps a point of the laid-out image to its on-screen position.
    #[must_use]
    pub fn map_point(&self, layout: Rectangle, point: Point) -> Point {
        let center = layout.center();
        let from_center = point - center;
        center + from_center * self.scale + self.translation
    }

    /// Offset to translate a drawing frame by before scaling it by
    /// `self.scale`, so that drawing `layout` lands where [`Self::map_point`]
    /// puts it.
    #[must_use]
    pub fn frame_offset(&self, layout: Rectangle) -> Vector {
        let center = layout.center();
        Vector::new(
            center.x * (1.0 - self.scale) + self.translation.x,
            center.y * (1.0 - self.scale) + self.translation.y,
        )
    }

    /// Returns the on-screen rectangle covered by the laid-out image.
    ///
    /// With a negative scale the corners swap; the result is normalized so
    /// that width and height are never negative.
    #[must_use]
    pub fn map_rect(&self, layout: Rectangle) -> Rectangle {
        let a = self.map_point(layout, Point::new(layout.x, layout.y));
        let b = self.map_point(
            layout,
            Point::new(layout.x + layout.width, layout.y + layout.height),
        );

        Rectangle {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Zoom as a percentage (1.0 → 100%).
    #[must_use]
    pub fn zoom_percent(&self) -> f32 {
        self.scale * 100.0
    }
}

impl Default for RenderTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Cumulative zoom and pan of the image viewer.
#[derive(Debug, Clone)]
pub struct ZoomTransformState {
    scale: f32,
    translation: Vector,
    /// Bumped on every mutation so the render step knows it must redraw.
    revision: u64,
}

impl Default for ZoomTransformState {
    fn default() -> Self {
        Self {
            scale: INITIAL_SCALE,
            translation: Vector::ZERO,
            revision: 0,
        }
    }
}

impl ZoomTransformState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiplies the scale by `delta`.
    pub fn apply_zoom_delta(&mut self, delta: f32) {
        self.scale *= delta;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Adds `delta` to the translation, component-wise.
    pub fn apply_pan_delta(&mut self, delta: Vector) {
        self.translation = self.translation + delta;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Applies one gesture update.
    pub fn apply(&mut self, delta: GestureDelta) {
        match delta {
            GestureDelta::Zoom(factor) => self.apply_zoom_delta(factor),
            GestureDelta::Pan(offset) => self.apply_pan_delta(offset),
        }
    }

    /// Returns the current `(scale, translation)` pair.
    #[must_use]
    pub fn current_transform(&self) -> RenderTransform {
        RenderTransform {
            scale: self.scale,
            translation: self.translation,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn translation(&self) -> Vector {
        self.translation
    }

    /// Number of mutations applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Size;

    fn apply_all(state: &mut ZoomTransformState, deltas: &[GestureDelta]) {
        for delta in deltas {
            state.apply(*delta);
        }
    }

    #[test]
    fn initial_state_is_identity() {
        let state = ZoomTransformState::new();
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.translation(), Vector::ZERO);
        assert_eq!(state.current_transform(), RenderTransform::IDENTITY);
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn zoom_deltas_multiply() {
        let mut state = ZoomTransformState::new();
        state.apply_zoom_delta(1.5);
        state.apply_zoom_delta(2.0);
        assert_abs_diff_eq!(state.scale(), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn zoom_result_is_product_of_all_deltas() {
        let deltas = [1.1_f32, 0.9, 1.25, 0.8, 3.0, 0.5];
        let mut state = ZoomTransformState::new();
        for delta in deltas {
            state.apply_zoom_delta(delta);
        }
        let expected: f32 = deltas.iter().product();
        assert_abs_diff_eq!(state.scale(), expected, epsilon = 1e-5);
    }

    #[test]
    fn pan_deltas_sum() {
        let mut state = ZoomTransformState::new();
        state.apply_pan_delta(Vector::new(10.0, 5.0));
        state.apply_pan_delta(Vector::new(-3.0, 2.0));
        assert_eq!(state.translation(), Vector::new(7.0, 7.0));
    }

    #[test]
    fn pan_sum_does_not_depend_on_order() {
        let deltas = [
            Vector::new(4.5, -1.0),
            Vector::new(-10.0, 3.25),
            Vector::new(0.5, 0.5),
        ];

        let mut forward = ZoomTransformState::new();
        deltas.iter().for_each(|d| forward.apply_pan_delta(*d));

        let mut backward = ZoomTransformState::new();
        deltas.iter().rev().for_each(|d| backward.apply_pan_delta(*d));

        assert_abs_diff_eq!(forward.translation().x, backward.translation().x);
        assert_abs_diff_eq!(forward.translation().y, backward.translation().y);
        assert_abs_diff_eq!(forward.translation().x, -5.0);
        assert_abs_diff_eq!(forward.translation().y, 2.75);
    }

    #[test]
    fn identity_deltas_leave_values_unchanged() {
        let mut state = ZoomTransformState::new();
        state.apply_zoom_delta(2.0);
        state.apply_pan_delta(Vector::new(3.0, 4.0));

        state.apply_zoom_delta(1.0);
        state.apply_pan_delta(Vector::ZERO);

        assert_eq!(state.scale(), 2.0);
        assert_eq!(state.translation(), Vector::new(3.0, 4.0));
    }

    #[test]
    fn zero_zoom_is_accepted() {
        let mut state = ZoomTransformState::new();
        state.apply_zoom_delta(0.0);
        assert_eq!(state.scale(), 0.0);
    }

    #[test]
    fn negative_zoom_is_accepted() {
        let mut state = ZoomTransformState::new();
        state.apply_zoom_delta(-2.0);
        assert_eq!(state.scale(), -2.0);
    }

    #[test]
    fn interleaving_zoom_and_pan_gives_same_state() {
        let mut zoom_first = ZoomTransformState::new();
        apply_all(
            &mut zoom_first,
            &[
                GestureDelta::Zoom(2.0),
                GestureDelta::Pan(Vector::new(1.0, 1.0)),
            ],
        );

        let mut pan_first = ZoomTransformState::new();
        apply_all(
            &mut pan_first,
            &[
                GestureDelta::Pan(Vector::new(1.0, 1.0)),
                GestureDelta::Zoom(2.0),
            ],
        );

        assert_eq!(zoom_first.current_transform(), pan_first.current_transform());
        assert_eq!(zoom_first.scale(), 2.0);
        assert_eq!(zoom_first.translation(), Vector::new(1.0, 1.0));
    }

    #[test]
    fn every_mutation_bumps_revision() {
        let mut state = ZoomTransformState::new();
        state.apply_zoom_delta(1.0);
        state.apply_pan_delta(Vector::ZERO);
        state.apply(GestureDelta::Zoom(1.2));
        assert_eq!(state.revision(), 3);
    }

    #[test]
    fn map_point_scales_about_center_then_translates() {
        let layout = Rectangle::new(Point::new(0.0, 0.0), Size::new(200.0, 100.0));
        let transform = RenderTransform {
            scale: 2.0,
            translation: Vector::new(10.0, -5.0),
        };

        assert_eq!(
            transform.map_point(layout, layout.center()),
            Point::new(110.0, 45.0)
        );
        assert_eq!(
            transform.map_point(layout, Point::new(0.0, 0.0)),
            Point::new(-90.0, -55.0)
        );
    }

    #[test]
    fn frame_offset_then_scale_matches_map_point() {
        let layout = Rectangle::new(Point::new(30.0, 20.0), Size::new(200.0, 100.0));
        let transforms = [
            RenderTransform::IDENTITY,
            RenderTransform {
                scale: 2.0,
                translation: Vector::new(10.0, -5.0),
            },
            RenderTransform {
                scale: 0.25,
                translation: Vector::new(-40.0, 7.5),
            },
            RenderTransform {
                scale: -1.5,
                translation: Vector::new(3.0, 3.0),
            },
        ];
        let points = [
            layout.center(),
            Point::new(30.0, 20.0),
            Point::new(230.0, 120.0),
            Point::new(77.0, 101.0),
        ];

        for transform in transforms {
            let offset = transform.frame_offset(layout);
            for point in points {
                let expected = transform.map_point(layout, point);
                let drawn = Point::new(
                    offset.x + point.x * transform.scale,
                    offset.y + point.y * transform.scale,
                );
                assert_abs_diff_eq!(drawn.x, expected.x, epsilon = 1e-3);
                assert_abs_diff_eq!(drawn.y, expected.y, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn map_rect_normalizes_mirrored_scale() {
        let layout = Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 50.0));
        let transform = RenderTransform {
            scale: -1.0,
            translation: Vector::ZERO,
        };

        let mapped = transform.map_rect(layout);
        assert_eq!(mapped, layout);
    }

    #[test]
    fn zoom_percent_follows_scale() {
        let transform = RenderTransform {
            scale: 1.5,
            translation: Vector::ZERO,
        };
        assert_abs_diff_eq!(transform.zoom_percent(), 150.0);
    }
}
