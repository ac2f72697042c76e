// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native mouse and touch events to the viewer and turns file drops
//! into load requests.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, mouse, touch, window, Subscription};

/// Listens to window, mouse and touch events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: event::Event, status: event::Status, window: window::Id) -> Option<Message> {
    if let event::Event::Window(window::Event::FileDropped(path)) = &event {
        return Some(Message::FileDropped(path.clone()));
    }

    let to_viewer = match &event {
        // The wheel always zooms, even over the HUD.
        event::Event::Mouse(mouse::Event::WheelScrolled { .. }) => true,
        // Releases and cursor exits must reach the viewer to end a drag.
        event::Event::Mouse(mouse::Event::ButtonReleased(_) | mouse::Event::CursorLeft) => true,
        // Same for lifted fingers, or the finger would stay down forever.
        event::Event::Touch(
            touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
        ) => true,
        event::Event::Mouse(_) | event::Event::Touch(_) => status == event::Status::Ignored,
        _ => false,
    };

    to_viewer.then(|| Message::Viewer(component::Message::RawEvent { window, event }))
}
