// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::component;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image to open at startup; the built-in sample is shown otherwise.
    pub file_path: Option<String>,
}
