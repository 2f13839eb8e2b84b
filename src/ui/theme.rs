// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and overlay styles for the designer screens.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::widget::container;
use iced::{Color, Theme};

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Style for a card-like panel (form sections, list entries).
pub fn card_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(iced::Background::Color(base)),
        border: iced::Border {
            radius: crate::ui::design_tokens::radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Preview Overlay Styles
// ============================================================================

/// Border color of the draggable overlay image box.
pub fn overlay_border_color() -> Color {
    WHITE
}

/// Fill color of the overlay resize handle.
pub fn overlay_handle_color() -> Color {
    WHITE
}

/// Border color of the overlay resize handle.
pub fn overlay_handle_border_color() -> Color {
    BLACK
}

/// Highlight drawn around a section while it is being dragged.
pub fn section_drag_highlight_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Placeholder fill shown where the overlay image will land before one is
/// chosen.
pub fn overlay_placeholder_color() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..BLACK
    }
}
