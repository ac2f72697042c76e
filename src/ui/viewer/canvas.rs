// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the image with the current zoom/pan transform.

use crate::config::BackgroundTheme;
use crate::media::ImageData;
use crate::ui::components::checkerboard;
use crate::ui::state::RenderTransform;
use crate::ui::theming;
use iced::widget::canvas;
use iced::{mouse, Point, Rectangle, Size, Theme};

/// Render sink for the viewer: background, then the transformed image.
///
/// Geometry is cached; the owner clears the cache whenever the transform or
/// the image changes.
pub struct ZoomCanvas<'a> {
    pub image: Option<&'a ImageData>,
    pub transform: RenderTransform,
    pub background: BackgroundTheme,
    pub cache: &'a canvas::Cache,
}

impl<Message> canvas::Program<Message> for ZoomCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let size = frame.size();
            match theming::background_color(self.background) {
                Some(color) => frame.fill_rectangle(Point::ORIGIN, size, color),
                None => checkerboard::fill(frame, size),
            }

            let Some(image) = self.image else {
                return;
            };

            let layout = fit_rect(image.size(), size);
            let transform = self.transform;

            frame.with_save(|frame| {
                frame.translate(transform.frame_offset(layout));
                frame.scale(transform.scale);
                frame.draw_image(layout, canvas::Image::new(image.handle.clone()));
            });
        });

        vec![geometry]
    }
}

/// Largest rectangle with the image's aspect ratio that fits in `bounds`,
/// centered.
#[must_use]
pub fn fit_rect(image: Size, bounds: Size) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, Size::ZERO);
    }

    let ratio = (bounds.width / image.width).min(bounds.height / image.height);
    let width = image.width * ratio;
    let height = image.height * ratio;

    Rectangle {
        x: (bounds.width - width) / 2.0,
        y: (bounds.height - height) / 2.0,
        width,
        height,
    }
}
