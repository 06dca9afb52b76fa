// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers.

use crate::gallery::StatusKind;
use crate::ui::design_tokens::palette;
use iced::Color;

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for success text.
pub fn success_text_color() -> Color {
    palette::SUCCESS_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Color of the status line.
pub fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Success => success_text_color(),
        StatusKind::Error => error_text_color(),
    }
}

/// Controls over the dark lightbox backdrop.
pub fn overlay_control_color() -> Color {
    palette::WHITE
}
