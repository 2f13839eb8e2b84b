// SPDX-License-Identifier: MPL-2.0
//! Messages entering the preview component and events leaving it.

use super::layout::SectionLayout;
use crate::ticket::OverlayAnchor;
use iced::{Point, Size};
use std::path::PathBuf;

/// Raw input for the preview state machine.
///
/// Pointer messages carry the canvas bounds so the geometry model learns
/// the surface size before the first clamp is needed.
#[derive(Debug, Clone)]
pub enum Message {
    PointerPressed { position: Point, bounds: Size },
    PointerMoved { position: Point, bounds: Size },
    PointerReleased,
    PointerLeft,
    /// The overlay image source changed (picked or cleared).
    OverlaySourceChanged(Option<PathBuf>),
    /// The user picked a different horizontal anchor for the overlay.
    AnchorSelected(OverlayAnchor),
    /// Put every section back where it started.
    ResetSections,
}

/// Notifications for the owning screen.
#[derive(Debug, Clone)]
pub enum Event {
    /// A section moved; carries the full layout snapshot. Consumers should
    /// treat repeated events as last-value-wins.
    LayoutChanged(SectionLayout),
}
