// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::config::BackgroundTheme;
use crate::i18n::fluent::I18n;
use crate::ui::viewer::{component, ViewEnv};
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a component::State,
    pub background: BackgroundTheme,
    pub show_hud: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let env = ViewEnv {
        i18n: ctx.i18n,
        background: ctx.background,
        show_hud: ctx.show_hud,
    };

    Container::new(ctx.viewer.view(env).map(Message::Viewer))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
