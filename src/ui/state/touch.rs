// SPDX-License-Identifier: MPL-2.0
//! Touch gesture tracking
//!
//! Turns raw finger events into pinch (zoom) and drag (pan) deltas. Every
//! finger move compares the finger set before and after the move:
//! - pan is the displacement of the centroid of all fingers
//! - zoom is the ratio of the mean finger distance from that centroid
//!
//! A gesture stays silent until its accumulated motion exceeds the touch
//! slop, so jitter of a resting finger does not nudge the image.

use super::transform::GestureDelta;
use iced::touch::{self, Finger};
use iced::{Point, Vector};
use std::collections::HashMap;

/// Finger tracking and slop detection for pinch/drag gestures.
#[derive(Debug, Clone)]
pub struct TouchState {
    fingers: HashMap<Finger, Point>,
    /// Motion (in pixels) required before deltas are emitted.
    slop: f32,
    past_slop: bool,
    accumulated_zoom: f32,
    accumulated_pan: Vector,
}

impl Default for TouchState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOUCH_SLOP)
    }
}

impl TouchState {
    #[must_use]
    pub fn new(slop: f32) -> Self {
        Self {
            fingers: HashMap::new(),
            slop,
            past_slop: false,
            accumulated_zoom: 1.0,
            accumulated_pan: Vector::ZERO,
        }
    }

    /// Whether any finger is on the surface.
    #[must_use]
    pub fn is_touching(&self) -> bool {
        !self.fingers.is_empty()
    }

    /// Feeds one touch event and returns the deltas it produces, in order.
    pub fn handle(&mut self, event: touch::Event) -> Vec<GestureDelta> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                self.fingers.insert(id, position);
                Vec::new()
            }
            touch::Event::FingerMoved { id, position } => self.finger_moved(id, position),
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                self.fingers.remove(&id);
                if self.fingers.is_empty() {
                    self.reset_gesture();
                }
                Vec::new()
            }
        }
    }

    fn finger_moved(&mut self, id: Finger, position: Point) -> Vec<GestureDelta> {
        let Some(previous) = self.fingers.get(&id).copied() else {
            // Moves of a finger we never saw pressed start tracking it.
            self.fingers.insert(id, position);
            return Vec::new();
        };

        let before = Spread::of(self.fingers.values().copied());
        self.fingers.insert(id, position);
        let after = Spread::of(self.fingers.values().copied());

        let (Some(before), Some(after)) = (before, after) else {
            return Vec::new();
        };

        let pan = after.centroid - before.centroid;
        let zoom = if self.fingers.len() >= 2 && before.size > 0.0 {
            after.size / before.size
        } else {
            1.0
        };

        if !self.past_slop {
            self.accumulated_zoom *= zoom;
            self.accumulated_pan = self.accumulated_pan + pan;

            let zoom_motion = (1.0 - self.accumulated_zoom).abs() * after.size;
            let pan_motion = length(self.accumulated_pan);

            if zoom_motion + pan_motion > self.slop {
                self.past_slop = true;
            } else {
                log::trace!("touch motion below slop: finger {id:?} at {previous:?} -> {position:?}");
                return Vec::new();
            }
        }

        let mut deltas = Vec::with_capacity(2);
        if zoom != 1.0 {
            deltas.push(GestureDelta::Zoom(zoom));
        }
        if pan != Vector::ZERO {
            deltas.push(GestureDelta::Pan(pan));
        }
        deltas
    }

    fn reset_gesture(&mut self) {
        self.past_slop = false;
        self.accumulated_zoom = 1.0;
        self.accumulated_pan = Vector::ZERO;
    }
}

/// Centroid and mean distance to the centroid of a set of fingers.
#[derive(Debug, Clone, Copy)]
struct Spread {
    centroid: Point,
    size: f32,
}

impl Spread {
    fn of(points: impl Iterator<Item = Point> + Clone) -> Option<Self> {
        let mut count = 0_usize;
        let mut sum = Vector::ZERO;
        for point in points.clone() {
            sum = sum + Vector::new(point.x, point.y);
            count += 1;
        }
        if count == 0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let n = count as f32;
        let centroid = Point::new(sum.x / n, sum.y / n);
        let size = points.map(|p| p.distance(centroid)).sum::<f32>() / n;

        Some(Self { centroid, size })
    }
}

fn length(v: Vector) -> f32 {
    v.x.hypot(v.y)
}
