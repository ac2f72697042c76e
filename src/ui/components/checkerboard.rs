// SPDX-License-Identifier: MPL-2.0
//! Checkerboard background used behind transparent images.

use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{Color, Point, Size};

const TILE_SIZE: f32 = 20.0;
const LIGHT_TILE: Color = palette::GRAY_100;
const DARK_TILE: Color = palette::GRAY_200;

/// Fills `size` of the frame (from its origin) with checkerboard tiles.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn fill(frame: &mut canvas::Frame, size: Size) {
    frame.fill_rectangle(Point::ORIGIN, size, LIGHT_TILE);

    let cols = ((size.width / TILE_SIZE).ceil() as i32).max(1);
    let rows = ((size.height / TILE_SIZE).ceil() as i32).max(1);

    for row in 0..rows {
        for col in 0..cols {
            if tile_color(row, col) != DARK_TILE {
                continue;
            }
            frame.fill_rectangle(
                Point::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE),
                Size::new(TILE_SIZE + 0.5, TILE_SIZE + 0.5),
                DARK_TILE,
            );
        }
    }
}

fn tile_color(row: i32, col: i32) -> Color {
    if (row + col) % 2 == 0 {
        LIGHT_TILE
    } else {
        DARK_TILE
    }
}

const _: () = {
    assert!(TILE_SIZE > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_different() {
        assert_ne!(LIGHT_TILE, DARK_TILE);
    }

    #[test]
    fn neighbouring_tiles_alternate() {
        assert_eq!(tile_color(0, 0), LIGHT_TILE);
        assert_eq!(tile_color(0, 1), DARK_TILE);
        assert_eq!(tile_color(1, 0), DARK_TILE);
        assert_eq!(tile_color(1, 1), LIGHT_TILE);
    }
}
