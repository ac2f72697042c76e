// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the viewer widgets.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Overlay opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Typography**: Font sizes
//! - **Radius**: Border radii

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

pub mod typography {
    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - HUD readouts
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(typography::BODY > typography::CAPTION);
};
