// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag with the mouse, reporting the cursor displacement of
//! each move as a pan delta.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Cursor position at the previous drag update
    pub last_position: Option<Point>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point) {
        self.is_dragging = true;
        self.last_position = Some(position);
    }

    /// Starts a drag whose origin is the next reported cursor position.
    pub fn start_at_next_move(&mut self) {
        self.is_dragging = true;
        self.last_position = None;
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.last_position = None;
    }

    /// Records the new cursor position and returns how far it moved since
    /// the previous update.
    pub fn drag_to(&mut self, position: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let last = self.last_position.replace(position)?;
        let delta = position - last;

        (delta != Vector::ZERO).then_some(delta)
    }
}
