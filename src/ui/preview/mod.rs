// SPDX-License-Identifier: MPL-2.0
//! Live ticket preview with draggable sections and overlay image.
//!
//! The component follows the usual state-down/messages-up split: the canvas
//! forwards raw pointer events as [`Message`]s, [`State::update`] runs the
//! gesture machine against the geometry model, and layout changes flow back
//! to the owning screen as [`Event`]s.

pub mod canvas;
pub mod gesture;
pub mod layout;
pub mod messages;
pub mod sections;


use crate::ticket::design::ColorScheme;
use crate::ticket::qr::CodeMatrix;
use crate::ticket::EventData;
use crate::ui::design_tokens::sizing;
use canvas::TicketCanvas;
use gesture::{Gesture, Hit};
use iced::widget::image;
use iced::{Element, Length, Vector};
use layout::{GeometryModel, SectionLayout};
use messages::{Event, Message};
use sections::SectionId;
use std::path::PathBuf;

/// Form state the preview renders but does not own. The color scheme is
/// owned because the designer derives it per frame.
pub struct ViewContext<'a> {
    pub event: &'a EventData,
    pub colors: ColorScheme,
    pub ticket_id: &'a str,
    pub code: &'a CodeMatrix,
    /// Full-bleed background image, when one is picked.
    pub background: Option<&'a image::Handle>,
}

/// The preview component's own state.
#[derive(Debug, Default)]
pub struct State {
    geometry: GeometryModel,
    gesture: Gesture,
    overlay_source: Option<PathBuf>,
    overlay_handle: Option<image::Handle>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot of every section position.
    pub fn section_layout(&self) -> SectionLayout {
        self.geometry.positions()
    }

    pub fn geometry(&self) -> &GeometryModel {
        &self.geometry
    }

    /// Whether an overlay image is active on the ticket.
    pub fn overlay_active(&self) -> bool {
        self.overlay_source.is_some()
    }

    pub fn overlay_source(&self) -> Option<&PathBuf> {
        self.overlay_source.as_ref()
    }

    fn dragging_section(&self) -> Option<SectionId> {
        match self.gesture {
            Gesture::DraggingSection { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Advances the state machine. `event_data` is needed because section
    /// visibility (and therefore hit-testing) depends on the form.
    pub fn update(&mut self, message: Message, event_data: &EventData) -> Option<Event> {
        match message {
            Message::PointerPressed { position, bounds } => {
                self.geometry.set_container(bounds);

                // One gesture at a time.
                if !self.gesture.is_idle() {
                    return None;
                }

                match gesture::hit_test(
                    &self.geometry,
                    event_data,
                    self.overlay_active(),
                    position,
                ) {
                    Hit::ResizeHandle => {
                        let overlay = self.geometry.overlay();
                        self.gesture = Gesture::ResizingOverlay {
                            start_cursor: position,
                            start_size: iced::Size::new(overlay.width, overlay.height),
                        };
                    }
                    Hit::Overlay => {
                        let overlay = self.geometry.overlay();
                        self.gesture = Gesture::DraggingOverlay {
                            grab: Vector::new(position.x - overlay.x, position.y - overlay.y),
                        };
                    }
                    Hit::Section(id) => {
                        let section = self.geometry.section_position(id);
                        self.gesture = Gesture::DraggingSection {
                            id,
                            grab: Vector::new(position.x - section.x, position.y - section.y),
                        };
                    }
                    Hit::Background => {}
                }
                None
            }
            Message::PointerMoved { position, bounds } => {
                self.geometry.set_container(bounds);

                match self.gesture {
                    Gesture::Idle => None,
                    Gesture::DraggingOverlay { grab } => {
                        self.geometry
                            .move_overlay(position.x - grab.x, position.y - grab.y);
                        None
                    }
                    Gesture::ResizingOverlay {
                        start_cursor,
                        start_size,
                    } => {
                        self.geometry.resize_overlay(
                            start_size,
                            position.x - start_cursor.x,
                            position.y - start_cursor.y,
                        );
                        None
                    }
                    Gesture::DraggingSection { id, grab } => {
                        let before = self.geometry.section_position(id);
                        self.geometry
                            .move_section(id, position.x - grab.x, position.y - grab.y);
                        let after = self.geometry.section_position(id);

                        if before == after {
                            None
                        } else {
                            Some(Event::LayoutChanged(self.geometry.positions()))
                        }
                    }
                }
            }
            Message::PointerReleased | Message::PointerLeft => {
                self.gesture = Gesture::Idle;
                None
            }
            Message::OverlaySourceChanged(source) => {
                if source != self.overlay_source {
                    self.overlay_handle = source.as_ref().map(image::Handle::from_path);
                    self.overlay_source = source;
                    self.geometry.reset_overlay();
                    self.gesture = Gesture::Idle;
                }
                None
            }
            Message::AnchorSelected(anchor) => {
                self.geometry.seed_overlay_anchor(anchor);
                None
            }
            Message::ResetSections => {
                self.geometry.reset_sections();
                Some(Event::LayoutChanged(self.geometry.positions()))
            }
        }
    }

    pub fn view<'a>(&'a self, context: ViewContext<'a>) -> Element<'a, Message> {
        iced::widget::canvas(TicketCanvas {
            geometry: &self.geometry,
            event: context.event,
            colors: context.colors,
            ticket_id: context.ticket_id,
            code: context.code,
            background_image: context.background,
            overlay_image: self.overlay_handle.as_ref(),
            dragging_section: self.dragging_section(),
        })
        .width(Length::Fixed(sizing::TICKET_WIDTH))
        .height(Length::Fixed(sizing::TICKET_HEIGHT))
        .into()
    }
}
