// SPDX-License-Identifier: MPL-2.0
//! Geometry model for the live ticket preview.
//!
//! Holds the overlay image box and the per-section positions, and applies
//! every clamp in one place so the gesture code never produces an
//! out-of-bounds layout. All coordinates are in ticket-surface pixels with
//! the origin at the top-left corner.

use super::sections::SectionId;
use crate::ticket::OverlayAnchor;
use iced::Size;
use std::collections::BTreeMap;

/// Smallest overlay edge, per axis.
pub const OVERLAY_MIN_SIZE: f32 = 40.0;
/// Largest overlay edge, per axis.
pub const OVERLAY_MAX_SIZE: f32 = 200.0;
/// Cursor travel is halved before it becomes overlay growth.
pub const RESIZE_SENSITIVITY: f32 = 0.5;

/// Nominal footprint used to keep dragged sections inside the surface. The
/// true rendered extent varies with content; a fixed footprint keeps the
/// clamp predictable.
pub const SECTION_FOOTPRINT_WIDTH: f32 = 100.0;
pub const SECTION_FOOTPRINT_HEIGHT: f32 = 50.0;

/// Margin applied when an anchor seeds the overlay near an edge.
const ANCHOR_MARGIN: f32 = 20.0;

/// Position and size of the draggable overlay image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl OverlayBox {
    pub const DEFAULT: OverlayBox = OverlayBox {
        x: 50.0,
        y: 50.0,
        width: 80.0,
        height: 80.0,
    };

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

impl Default for OverlayBox {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Top-left corner of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionPosition {
    pub x: f32,
    pub y: f32,
}

/// Full snapshot of where every section sits, keyed by id.
pub type SectionLayout = BTreeMap<SectionId, SectionPosition>;

/// The complete preview geometry.
///
/// Movement operations silently do nothing until the container size is
/// known; the canvas reports it with the first pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryModel {
    container: Option<Size>,
    overlay: OverlayBox,
    sections: SectionLayout,
}

impl Default for GeometryModel {
    fn default() -> Self {
        let sections = SectionId::ALL
            .iter()
            .map(|&id| {
                let (x, y) = id.default_position();
                (id, SectionPosition { x, y })
            })
            .collect();

        Self {
            container: None,
            overlay: OverlayBox::DEFAULT,
            sections,
        }
    }
}

impl GeometryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the ticket surface size reported by the canvas.
    pub fn set_container(&mut self, size: Size) {
        self.container = Some(size);
    }

    pub fn container(&self) -> Option<Size> {
        self.container
    }

    pub fn overlay(&self) -> OverlayBox {
        self.overlay
    }

    pub fn section_position(&self, id: SectionId) -> SectionPosition {
        self.sections[&id]
    }

    /// A copy of the full section layout.
    pub fn positions(&self) -> SectionLayout {
        self.sections.clone()
    }

    /// Moves the overlay's top-left corner, clamped so the box stays on the
    /// surface. No-op until the container size is known.
    pub fn move_overlay(&mut self, x: f32, y: f32) {
        let Some(container) = self.container else {
            return;
        };

        let max_x = (container.width - self.overlay.width).max(0.0);
        let max_y = (container.height - self.overlay.height).max(0.0);
        self.overlay.x = x.clamp(0.0, max_x);
        self.overlay.y = y.clamp(0.0, max_y);
    }

    /// Resizes the overlay from a gesture-start size by a cursor delta.
    ///
    /// Each axis is scaled by [`RESIZE_SENSITIVITY`] and clamped
    /// independently; shrinking one edge to the minimum never blocks
    /// growing the other.
    pub fn resize_overlay(&mut self, start: Size, delta_x: f32, delta_y: f32) {
        self.overlay.width =
            (start.width + delta_x * RESIZE_SENSITIVITY).clamp(OVERLAY_MIN_SIZE, OVERLAY_MAX_SIZE);
        self.overlay.height =
            (start.height + delta_y * RESIZE_SENSITIVITY).clamp(OVERLAY_MIN_SIZE, OVERLAY_MAX_SIZE);
    }

    /// Moves a section's top-left corner, clamped against the nominal
    /// section footprint. No-op until the container size is known.
    pub fn move_section(&mut self, id: SectionId, x: f32, y: f32) {
        let Some(container) = self.container else {
            return;
        };

        let max_x = (container.width - SECTION_FOOTPRINT_WIDTH).max(0.0);
        let max_y = (container.height - SECTION_FOOTPRINT_HEIGHT).max(0.0);
        if let Some(position) = self.sections.get_mut(&id) {
            position.x = x.clamp(0.0, max_x);
            position.y = y.clamp(0.0, max_y);
        }
    }

    /// Puts the overlay back at its default box. Called whenever the
    /// overlay image source changes.
    pub fn reset_overlay(&mut self) {
        self.overlay = OverlayBox::DEFAULT;
    }

    /// Re-seeds the overlay's horizontal position from an anchor choice,
    /// keeping its vertical position and size.
    pub fn seed_overlay_anchor(&mut self, anchor: OverlayAnchor) {
        let Some(container) = self.container else {
            return;
        };

        let x = match anchor {
            OverlayAnchor::Left => ANCHOR_MARGIN,
            OverlayAnchor::Center => (container.width - self.overlay.width) / 2.0,
            OverlayAnchor::Right => container.width - self.overlay.width - ANCHOR_MARGIN,
        };
        let max_x = (container.width - self.overlay.width).max(0.0);
        self.overlay.x = x.clamp(0.0, max_x);
    }

    /// Resets every section to its default position.
    pub fn reset_sections(&mut self) {
        for (&id, position) in &mut self.sections {
            let (x, y) = id.default_position();
            *position = SectionPosition { x, y };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_container() -> GeometryModel {
        let mut model = GeometryModel::new();
        model.set_container(Size::new(600.0, 300.0));
        model
    }

    #[test]
    fn default_overlay_box_matches_fresh_ticket() {
        let model = GeometryModel::new();
        assert_eq!(model.overlay(), OverlayBox::DEFAULT);
        assert_eq!(model.overlay().width, 80.0);
    }

    #[test]
    fn move_overlay_without_container_is_a_no_op() {
        let mut model = GeometryModel::new();
        model.move_overlay(120.0, 120.0);
        assert_eq!(model.overlay(), OverlayBox::DEFAULT);
    }

    #[test]
    fn move_overlay_clamps_to_surface() {
        let mut model = model_with_container();
        model.move_overlay(10_000.0, -10_000.0);
        assert_eq!(model.overlay().x, 600.0 - 80.0);
        assert_eq!(model.overlay().y, 0.0);
    }

    #[test]
    fn resize_applies_half_sensitivity_per_axis() {
        let mut model = model_with_container();
        model.resize_overlay(Size::new(80.0, 80.0), 40.0, 0.0);
        assert_eq!(model.overlay().width, 100.0);
        assert_eq!(model.overlay().height, 80.0);
    }

    #[test]
    fn resize_clamps_each_axis_independently() {
        let mut model = model_with_container();
        model.resize_overlay(Size::new(80.0, 80.0), 10_000.0, -10_000.0);
        assert_eq!(model.overlay().width, OVERLAY_MAX_SIZE);
        assert_eq!(model.overlay().height, OVERLAY_MIN_SIZE);
    }

    #[test]
    fn move_section_clamps_against_footprint() {
        let mut model = model_with_container();
        model.move_section(SectionId::EventName, 10_000.0, 10_000.0);
        let position = model.section_position(SectionId::EventName);
        assert_eq!(position.x, 600.0 - SECTION_FOOTPRINT_WIDTH);
        assert_eq!(position.y, 300.0 - SECTION_FOOTPRINT_HEIGHT);
    }

    #[test]
    fn move_section_without_container_is_a_no_op() {
        let mut model = GeometryModel::new();
        model.move_section(SectionId::Venue, 400.0, 200.0);
        let (default_x, default_y) = SectionId::Venue.default_position();
        let position = model.section_position(SectionId::Venue);
        assert_eq!(position.x, default_x);
        assert_eq!(position.y, default_y);
    }

    #[test]
    fn tiny_container_pins_positions_to_origin() {
        let mut model = GeometryModel::new();
        model.set_container(Size::new(50.0, 30.0));
        model.move_overlay(25.0, 25.0);
        assert_eq!(model.overlay().x, 0.0);
        assert_eq!(model.overlay().y, 0.0);
    }

    #[test]
    fn reset_overlay_restores_default_box() {
        let mut model = model_with_container();
        model.move_overlay(200.0, 100.0);
        model.resize_overlay(Size::new(80.0, 80.0), 100.0, 100.0);
        model.reset_overlay();
        assert_eq!(model.overlay(), OverlayBox::DEFAULT);
    }

    #[test]
    fn anchor_seeding_keeps_vertical_position_and_size() {
        let mut model = model_with_container();
        model.move_overlay(100.0, 120.0);

        model.seed_overlay_anchor(OverlayAnchor::Left);
        assert_eq!(model.overlay().x, 20.0);
        assert_eq!(model.overlay().y, 120.0);

        model.seed_overlay_anchor(OverlayAnchor::Center);
        assert_eq!(model.overlay().x, (600.0 - 80.0) / 2.0);

        model.seed_overlay_anchor(OverlayAnchor::Right);
        assert_eq!(model.overlay().x, 600.0 - 80.0 - 20.0);
    }

    #[test]
    fn positions_snapshot_has_all_eight_sections() {
        let model = GeometryModel::new();
        assert_eq!(model.positions().len(), SectionId::ALL.len());
    }

    #[test]
    fn reset_sections_restores_defaults() {
        let mut model = model_with_container();
        model.move_section(SectionId::QrCode, 10.0, 10.0);
        model.reset_sections();
        let (x, y) = SectionId::QrCode.default_position();
        let position = model.section_position(SectionId::QrCode);
        assert_eq!((position.x, position.y), (x, y));
    }
}
