// SPDX-License-Identifier: MPL-2.0
//! Single-pointer gesture state and hit-testing for the ticket surface.
//!
//! One gesture is active at a time; pressing while a gesture runs is
//! ignored, and releasing (or leaving the canvas) always returns to
//! [`Gesture::Idle`].

use super::layout::{GeometryModel, OverlayBox, SECTION_FOOTPRINT_HEIGHT, SECTION_FOOTPRINT_WIDTH};
use super::sections::SectionId;
use crate::ticket::EventData;
use crate::ui::design_tokens::sizing;
use iced::{Point, Rectangle, Size, Vector};

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Moving the overlay image; `grab` is the cursor offset from the box's
    /// top-left corner at press time.
    DraggingOverlay { grab: Vector },
    /// Resizing the overlay from its corner handle.
    ResizingOverlay {
        start_cursor: Point,
        start_size: Size,
    },
    /// Moving one text section; `grab` as for the overlay.
    DraggingSection { id: SectionId, grab: Vector },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

/// What the pointer landed on at press time, in priority order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    ResizeHandle,
    Overlay,
    Section(SectionId),
    Background,
}

/// Visual rectangle of the overlay's resize handle (bottom-right corner).
pub fn handle_rect(overlay: OverlayBox) -> Rectangle {
    let size = sizing::OVERLAY_HANDLE_SIZE;
    Rectangle {
        x: overlay.x + overlay.width - size / 2.0,
        y: overlay.y + overlay.height - size / 2.0,
        width: size,
        height: size,
    }
}

/// Enlarged hit area for the resize handle, centered on the corner.
pub fn handle_hit_rect(overlay: OverlayBox) -> Rectangle {
    let size = sizing::OVERLAY_HANDLE_HIT_SIZE;
    Rectangle {
        x: overlay.x + overlay.width - size / 2.0,
        y: overlay.y + overlay.height - size / 2.0,
        width: size,
        height: size,
    }
}

/// Bounding rectangle used when hit-testing a section.
pub fn section_rect(geometry: &GeometryModel, id: SectionId) -> Rectangle {
    let position = geometry.section_position(id);
    Rectangle {
        x: position.x,
        y: position.y,
        width: SECTION_FOOTPRINT_WIDTH,
        height: SECTION_FOOTPRINT_HEIGHT,
    }
}

/// Resolves what a press at `point` grabs.
///
/// The resize handle wins over the overlay body, which wins over sections.
/// Among overlapping sections the one painted last (topmost) wins. Hidden
/// sections are skipped. The overlay only participates while an overlay
/// image is active.
pub fn hit_test(
    geometry: &GeometryModel,
    event: &EventData,
    overlay_active: bool,
    point: Point,
) -> Hit {
    if overlay_active {
        let overlay = geometry.overlay();
        if handle_hit_rect(overlay).contains(point) {
            return Hit::ResizeHandle;
        }
        if overlay.contains(point.x, point.y) {
            return Hit::Overlay;
        }
    }

    for &id in SectionId::ALL.iter().rev() {
        if id.is_visible(event) && section_rect(geometry, id).contains(point) {
            return Hit::Section(id);
        }
    }

    Hit::Background
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GeometryModel {
        let mut model = GeometryModel::new();
        model.set_container(Size::new(600.0, 300.0));
        model
    }

    #[test]
    fn handle_beats_overlay_body() {
        let model = geometry();
        let overlay = model.overlay();
        let corner = Point::new(overlay.x + overlay.width, overlay.y + overlay.height);

        let hit = hit_test(&model, &EventData::default(), true, corner);
        assert_eq!(hit, Hit::ResizeHandle);
    }

    #[test]
    fn overlay_body_beats_sections_underneath() {
        let mut model = geometry();
        // Put the event name section directly under the overlay.
        model.move_section(SectionId::EventName, 50.0, 50.0);

        let hit = hit_test(&model, &EventData::default(), true, Point::new(60.0, 60.0));
        assert_eq!(hit, Hit::Overlay);
    }

    #[test]
    fn inactive_overlay_is_transparent_to_hits() {
        let model = geometry();
        // (60, 55) lies inside the default overlay box and over the event
        // name footprint only (venue starts at y 60).
        let point = Point::new(60.0, 55.0);

        let hit = hit_test(&model, &EventData::default(), true, point);
        assert_eq!(hit, Hit::Overlay);

        let hit = hit_test(&model, &EventData::default(), false, point);
        assert_eq!(hit, Hit::Section(SectionId::EventName));
    }

    #[test]
    fn topmost_section_wins_overlaps() {
        let mut model = geometry();
        model.move_section(SectionId::EventName, 300.0, 100.0);
        model.move_section(SectionId::Venue, 300.0, 100.0);

        // Venue paints after EventName, so it is on top.
        let hit = hit_test(&model, &EventData::default(), false, Point::new(310.0, 110.0));
        assert_eq!(hit, Hit::Section(SectionId::Venue));
    }

    #[test]
    fn hidden_sections_are_skipped() {
        let mut model = geometry();
        model.move_section(SectionId::Price, 300.0, 100.0);

        // Price is hidden while the price field is empty.
        let hit = hit_test(&model, &EventData::default(), false, Point::new(310.0, 110.0));
        assert_eq!(hit, Hit::Background);

        let event = EventData {
            price: "50".into(),
            ..EventData::default()
        };
        let hit = hit_test(&model, &event, false, Point::new(310.0, 110.0));
        assert_eq!(hit, Hit::Section(SectionId::Price));
    }

    #[test]
    fn empty_surface_hits_background() {
        let model = geometry();
        let hit = hit_test(&model, &EventData::default(), false, Point::new(590.0, 10.0));
        assert_eq!(hit, Hit::Background);
    }

    #[test]
    fn handle_hit_rect_is_larger_than_visual_rect() {
        let overlay = OverlayBox::DEFAULT;
        let visual = handle_rect(overlay);
        let hit = handle_hit_rect(overlay);
        assert!(hit.width > visual.width);
        assert!(hit.height > visual.height);
        // Both are centered on the same corner.
        assert_eq!(
            visual.x + visual.width / 2.0,
            hit.x + hit.width / 2.0,
        );
    }
}
