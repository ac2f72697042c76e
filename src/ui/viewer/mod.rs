// SPDX-License-Identifier: MPL-2.0
//! Image viewer: gesture handling, the zoomable canvas and its HUD.

pub mod canvas;
pub mod component;
pub mod hud;

pub use component::{Effect, Message, State, ViewEnv};
