// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.

use crate::config::{BackgroundTheme, GestureConfig, WHEEL_PIXELS_PER_LINE};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::state::{DragState, GestureDelta, RenderTransform, TouchState, ZoomTransformState};
use crate::ui::viewer::{canvas::ZoomCanvas, hud};
use iced::widget::{canvas, Canvas, Container, Stack, Text};
use iced::{alignment, event, mouse, window, Element, Length, Point};
use std::fmt;

/// Messages handled by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start loading a new image; the current one stays visible meanwhile.
    StartLoading,
    ImageLoaded(Result<ImageData, Error>),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The transform changed and the canvas must be redrawn.
    TransformChanged(RenderTransform),
    /// A new image replaced the displayed one.
    ImageChanged,
    /// Loading failed; carries the i18n key of the message shown.
    LoadFailed { key: &'static str },
}

/// Display settings passed down from the application.
#[derive(Debug, Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub background: BackgroundTheme,
    pub show_hud: bool,
}

/// Complete viewer state.
pub struct State {
    transform: ZoomTransformState,
    touch: TouchState,
    drag: DragState,
    cursor_position: Option<Point>,
    wheel_zoom_factor: f32,
    image: Option<ImageData>,
    is_loading: bool,
    error_key: Option<&'static str>,
    cache: canvas::Cache,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("transform", &self.transform)
            .field("touch", &self.touch)
            .field("drag", &self.drag)
            .field("cursor_position", &self.cursor_position)
            .field("wheel_zoom_factor", &self.wheel_zoom_factor)
            .field("image", &self.image.as_ref().map(ImageData::size))
            .field("is_loading", &self.is_loading)
            .field("error_key", &self.error_key)
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl State {
    #[must_use]
    pub fn new(gestures: &GestureConfig) -> Self {
        Self {
            transform: ZoomTransformState::new(),
            touch: TouchState::new(gestures.touch_slop()),
            drag: DragState::default(),
            cursor_position: None,
            wheel_zoom_factor: gestures.wheel_zoom_factor(),
            image: None,
            is_loading: false,
            error_key: None,
            cache: canvas::Cache::new(),
        }
    }

    /// Shows `image` right away, without going through a load.
    pub fn set_image(&mut self, image: ImageData) {
        self.image = Some(image);
        self.is_loading = false;
        self.error_key = None;
        self.cache.clear();
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// i18n key of the error currently shown, if any.
    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        self.error_key
    }

    /// Shows the localized message for `error` until the next image is
    /// displayed, and returns its i18n key.
    pub fn show_error(&mut self, error: &Error) -> &'static str {
        let key = error.i18n_key();
        self.error_key = Some(key);
        key
    }

    #[must_use]
    pub fn transform(&self) -> &ZoomTransformState {
        &self.transform
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::StartLoading => {
                self.is_loading = true;
                Effect::None
            }
            Message::ImageLoaded(Ok(image)) => {
                log::info!(
                    "loaded image {}x{} from {:?}",
                    image.width,
                    image.height,
                    image.source
                );
                self.set_image(image);
                Effect::ImageChanged
            }
            Message::ImageLoaded(Err(error)) => {
                log::error!("failed to load image: {error}");
                self.is_loading = false;
                Effect::LoadFailed {
                    key: self.show_error(&error),
                }
            }
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Touch(touch_event) => {
                let deltas = self.touch.handle(touch_event);
                self.apply_deltas(deltas)
            }
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::WheelScrolled { delta } => match self.wheel_zoom(delta) {
                    Some(factor) => self.apply_deltas([GestureDelta::Zoom(factor)]),
                    None => Effect::None,
                },
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    // Presses emulated from an ongoing touch gesture would pan twice.
                    if self.touch.is_touching() {
                        return Effect::None;
                    }
                    match self.cursor_position {
                        Some(position) => self.drag.start(position),
                        None => self.drag.start_at_next_move(),
                    }
                    Effect::None
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    self.drag.stop();
                    Effect::None
                }
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                    match self.drag.drag_to(position) {
                        Some(delta) => self.apply_deltas([GestureDelta::Pan(delta)]),
                        None => Effect::None,
                    }
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    self.drag.stop();
                    Effect::None
                }
                _ => Effect::None,
            },
            _ => Effect::None,
        }
    }

    /// Zoom factor for one wheel event; `None` when the wheel did not move
    /// vertically.
    fn wheel_zoom(&self, delta: mouse::ScrollDelta) -> Option<f32> {
        let lines = match delta {
            mouse::ScrollDelta::Lines { y, .. } => y,
            mouse::ScrollDelta::Pixels { y, .. } => y / WHEEL_PIXELS_PER_LINE,
        };

        if lines == 0.0 || !lines.is_finite() {
            return None;
        }

        Some(self.wheel_zoom_factor.powf(lines))
    }

    fn apply_deltas(&mut self, deltas: impl IntoIterator<Item = GestureDelta>) -> Effect {
        let before = self.transform.revision();
        for delta in deltas {
            log::trace!("gesture delta {delta:?}");
            self.transform.apply(delta);
        }

        if self.transform.revision() == before {
            return Effect::None;
        }

        self.cache.clear();
        Effect::TransformChanged(self.transform.current_transform())
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let transform = self.transform.current_transform();

        let canvas = Canvas::new(ZoomCanvas {
            image: self.image.as_ref(),
            transform,
            background: env.background,
            cache: &self.cache,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(canvas);

        if env.show_hud && self.image.is_some() {
            layers = layers.push(
                Container::new(hud::view(env.i18n, &transform))
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Left)
                    .align_y(alignment::Vertical::Top),
            );
        }

        if let Some(status) = self.status_text(env.i18n) {
            layers = layers.push(
                Container::new(status)
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Bottom),
            );
        }

        layers.into()
    }

    fn status_text<'a>(&self, i18n: &I18n) -> Option<Text<'a>> {
        if let Some(key) = self.error_key {
            return Some(
                Text::new(i18n.tr(key))
                    .size(typography::BODY)
                    .color(palette::ERROR_500),
            );
        }

        if self.is_loading {
            return Some(Text::new(i18n.tr("viewer-loading")).size(typography::BODY));
        }

        // Usage hint until the first gesture.
        (self.image.is_some() && self.transform.revision() == 0)
            .then(|| Text::new(i18n.tr("viewer-hint")).size(typography::CAPTION))
    }
}
