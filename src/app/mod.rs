// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the viewer.
//!
//! The `App` struct wires together the viewer, localization and settings, and
//! translates viewer effects and file drops into image loads.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, BackgroundTheme, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    theme_mode: ThemeMode,
    background: BackgroundTheme,
    show_hud: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer", &self.viewer)
            .field("theme_mode", &self.theme_mode)
            .field("background", &self.background)
            .field("show_hud", &self.show_hud)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config from disk, then boots with it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (mut app, task) = Self::with_config(flags, &config);
        if let Some(warning) = config_warning {
            app.report_config_warning(warning);
        }
        (app, task)
    }

    /// Logs a config problem and tells the user defaults are in use.
    fn report_config_warning(&mut self, warning: String) {
        log::warn!("{warning}");
        self.viewer.show_error(&Error::Config(warning));
    }

    /// Builds the application from an already loaded config and starts
    /// loading the startup image, if any.
    fn with_config(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        log::debug!("using locale {}", i18n.current_locale());

        let mut app = App {
            i18n,
            viewer: component::State::new(&config.gestures),
            theme_mode: config.general.theme_mode,
            background: config.background(),
            show_hud: config.show_hud(),
        };

        let task = match flags.file_path {
            Some(path) => app.load(PathBuf::from(path)),
            None => {
                app.viewer.set_image(media::sample_image());
                Task::none()
            }
        };

        (app, task)
    }

    /// Starts decoding `path` in the background; the current image stays
    /// visible until the new one is ready.
    fn load(&mut self, path: PathBuf) -> Task<Message> {
        log::info!("loading {}", path.display());
        self.viewer.handle(component::Message::StartLoading);

        Task::perform(async move { media::load_image(&path) }, |result| {
            Message::Viewer(component::Message::ImageLoaded(result))
        })
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.viewer.image() {
            Some(image) => {
                let name = image
                    .file_name()
                    .unwrap_or_else(|| self.i18n.tr("viewer-sample-name"));
                format!("{name} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                match self.viewer.handle(viewer_message) {
                    component::Effect::None | component::Effect::ImageChanged => {}
                    component::Effect::TransformChanged(transform) => {
                        log::trace!(
                            "transform scale={} translation=({}, {})",
                            transform.scale,
                            transform.translation.x,
                            transform.translation.y
                        );
                    }
                    component::Effect::LoadFailed { key } => {
                        log::debug!("showing load error {key}");
                    }
                }
                Task::none()
            }
            Message::FileDropped(path) => self.load(path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            background: self.background,
            show_hud: self.show_hud,
        })
    }
}
