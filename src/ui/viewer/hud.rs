// SPDX-License-Identifier: MPL-2.0
//! Heads-up display showing the current zoom and offset.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::state::RenderTransform;
use fluent_bundle::FluentValue;
use iced::widget::{container, Column, Container, Text};
use iced::{Border, Color, Element, Theme};

/// Transparent background for HUD
pub const HUD_BACKGROUND: Color = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

/// HUD text color (white).
pub const HUD_TEXT_COLOR: Color = palette::WHITE;

/// Zoom readout, e.g. "Zoom 150%".
pub fn zoom_line(i18n: &I18n, transform: &RenderTransform) -> String {
    i18n.tr_with_args(
        "viewer-hud-zoom",
        &[(
            "percent",
            FluentValue::from(format_number(transform.zoom_percent())),
        )],
    )
}

/// Offset readout in whole pixels.
pub fn offset_line(i18n: &I18n, transform: &RenderTransform) -> String {
    i18n.tr_with_args(
        "viewer-hud-offset",
        &[
            (
                "x",
                FluentValue::from(format!("{:.0}", transform.translation.x)),
            ),
            (
                "y",
                FluentValue::from(format!("{:.0}", transform.translation.y)),
            ),
        ],
    )
}

pub fn view<'a, Message: 'a>(i18n: &I18n, transform: &RenderTransform) -> Element<'a, Message> {
    let lines = Column::new()
        .spacing(spacing::XS / 2.0)
        .push(Text::new(zoom_line(i18n, transform)).size(typography::CAPTION))
        .push(Text::new(offset_line(i18n, transform)).size(typography::CAPTION));

    Container::new(lines)
        .padding(spacing::XS)
        .style(|_theme: &Theme| container::Style {
            background: Some(HUD_BACKGROUND.into()),
            text_color: Some(HUD_TEXT_COLOR),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Formats a number without trailing zeros, keeping at most one decimal.
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Unbounded zoom can exceed any integer type
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use iced::Vector;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn format_number_drops_trailing_zeros() {
        assert_eq!(format_number(150.0), "150");
        assert_eq!(format_number(137.5), "137.5");
        assert_eq!(format_number(110.04), "110");
    }

    #[test]
    fn format_number_keeps_huge_zoom_exact() {
        assert_eq!(format_number(1e10), "10000000000");
        assert_eq!(format_number(-3e9), "-3000000000");
    }

    #[test]
    fn zoom_line_shows_percent() {
        let transform = RenderTransform {
            scale: 1.5,
            translation: Vector::ZERO,
        };
        assert_eq!(zoom_line(&english(), &transform), "Zoom 150%");
    }

    #[test]
    fn offset_line_rounds_to_pixels() {
        let transform = RenderTransform {
            scale: 1.0,
            translation: Vector::new(12.4, -7.6),
        };
        assert_eq!(offset_line(&english(), &transform), "Offset 12, -8");
    }

    #[test]
    fn hud_background_is_translucent() {
        assert!(HUD_BACKGROUND.a > 0.0 && HUD_BACKGROUND.a < 1.0);
    }
}
