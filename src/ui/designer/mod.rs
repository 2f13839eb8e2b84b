// SPDX-License-Identifier: MPL-2.0
//! The designer screen: form, design picker, and live preview.

pub mod design_picker;
pub mod form;

use crate::export::{ExportFormat, ExportRequest, OverlaySnapshot};
use crate::library::SavedEvent;
use crate::ticket::design::{design_by_id, ColorScheme};
use crate::ticket::qr::CodeMatrix;
use crate::ticket::{generate_ticket_id, EventData};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::preview::{self, layout::SectionLayout, messages as preview_messages};
use crate::ui::theme;
use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Element, Length};
use std::path::PathBuf;

/// Which image slot a file dialog is being opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    /// Full-bleed background image.
    Event,
    /// Draggable overlay image.
    Ticket,
}

#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Design(design_picker::Message),
    Preview(preview_messages::Message),
    /// Result of an image file dialog opened by the app shell.
    ImagePicked(ImageTarget, Option<PathBuf>),
    RegenerateTicketId,
    ExportRequested(ExportFormat),
    SaveEventRequested,
    ResetLayout,
}

/// Requests the designer cannot satisfy on its own.
#[derive(Debug, Clone)]
pub enum Event {
    /// Open a file dialog for the given image slot.
    PickImage(ImageTarget),
    /// Open a save dialog and run the export.
    Export {
        format: ExportFormat,
        suggested_name: String,
    },
    /// Persist the current event to the library.
    SaveEvent(SavedEvent),
    /// A section moved on the preview surface.
    LayoutChanged(SectionLayout),
}

pub struct State {
    event: EventData,
    ticket_count: u32,
    design_id: String,
    custom_colors: ColorScheme,
    ticket_id: String,
    code: CodeMatrix,
    preview: preview::State,
    /// Decoded handle for the picked background image.
    background_handle: Option<image::Handle>,
    /// Library id this state was loaded from or last saved under, so
    /// repeated saves update the same entry.
    saved_id: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        let event = EventData::default();
        let ticket_id = generate_ticket_id(&event);
        let code = CodeMatrix::from_payload(&event.code_payload(&ticket_id));
        Self {
            event,
            ticket_count: 1,
            design_id: "sporty".to_string(),
            custom_colors: ColorScheme::default(),
            ticket_id,
            code,
            preview: preview::State::new(),
            background_handle: None,
            saved_id: None,
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event(&self) -> &EventData {
        &self.event
    }

    /// Applies a configured default design, keeping the built-in fallback
    /// when the id is unknown.
    pub fn set_design(&mut self, design_id: String) {
        self.design_id = design_by_id(&design_id).id.to_string();
    }

    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    /// The colors the ticket currently renders with.
    pub fn effective_colors(&self) -> ColorScheme {
        let design = design_by_id(&self.design_id);
        if design.is_custom() {
            self.custom_colors.clone()
        } else {
            design.scheme()
        }
    }

    /// Builds a complete export job for the given destination.
    pub fn export_request(&self, destination: PathBuf, scale: f32) -> ExportRequest {
        let overlay = self.preview.overlay_source().map(|source| OverlaySnapshot {
            source: source.clone(),
            placement: self.preview.geometry().overlay(),
        });

        ExportRequest {
            event: self.event.clone(),
            colors: self.effective_colors(),
            ticket_id: self.ticket_id.clone(),
            layout: self.preview.section_layout(),
            background: self.event.event_image.clone(),
            overlay,
            scale,
            destination,
        }
    }

    /// Restores a saved library event into the designer.
    pub fn load_saved(&mut self, saved: &SavedEvent) {
        self.event = EventData {
            event_name: saved.title.clone(),
            venue: saved.venue.clone(),
            date: saved.date.clone(),
            time: saved.time.clone(),
            seat_section: saved.seat_section.clone(),
            seat_row: saved.seat_row.clone(),
            seat_number: saved.seat_number.clone(),
            seat_type: saved.seat_type.clone(),
            price: saved.price.clone(),
            category: saved.category,
            ticket_type: saved.ticket_type.clone(),
            ..EventData::default()
        };
        self.ticket_count = saved.ticket_count.max(1);
        self.design_id = saved.design_id.clone();
        self.background_handle = None;
        self.saved_id = Some(saved.id.clone());
        if design_by_id(&self.design_id).is_custom() {
            self.custom_colors = saved.colors.clone();
        }
        self.regenerate_ticket_id();
        let _ = self
            .preview
            .update(preview_messages::Message::OverlaySourceChanged(None), &self.event);
    }

    /// Snapshot of the current state as a library record.
    fn to_saved_event(&self) -> SavedEvent {
        SavedEvent {
            id: self
                .saved_id
                .clone()
                .unwrap_or_else(|| format!("ev-{}", self.ticket_id.trim_start_matches("TKT-"))),
            title: self.event.event_name.clone(),
            venue: self.event.venue.clone(),
            date: self.event.date.clone(),
            time: self.event.time.clone(),
            category: self.event.category,
            ticket_type: self.event.effective_ticket_type().to_string(),
            seat_section: self.event.seat_section.clone(),
            seat_row: self.event.seat_row.clone(),
            seat_number: self.event.seat_number.clone(),
            seat_type: self.event.seat_type.clone(),
            price: self.event.price.clone(),
            ticket_count: self.ticket_count,
            design_id: self.design_id.clone(),
            colors: self.effective_colors(),
        }
    }

    fn regenerate_ticket_id(&mut self) {
        self.ticket_id = generate_ticket_id(&self.event);
        self.refresh_code();
    }

    fn refresh_code(&mut self) {
        self.code = CodeMatrix::from_payload(&self.event.code_payload(&self.ticket_id));
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Form(message) => {
                let action = form::apply(&mut self.event, &mut self.ticket_count, message);
                self.refresh_code();

                match action {
                    Some(form::Action::PickEventImage) => {
                        Some(Event::PickImage(ImageTarget::Event))
                    }
                    Some(form::Action::PickTicketImage) => {
                        Some(Event::PickImage(ImageTarget::Ticket))
                    }
                    Some(form::Action::OverlayCleared) => {
                        let _ = self.preview.update(
                            preview_messages::Message::OverlaySourceChanged(None),
                            &self.event,
                        );
                        None
                    }
                    Some(form::Action::BackgroundCleared) => {
                        self.background_handle = None;
                        None
                    }
                    Some(form::Action::AnchorChanged(anchor)) => {
                        let _ = self.preview.update(
                            preview_messages::Message::AnchorSelected(anchor),
                            &self.event,
                        );
                        None
                    }
                    None => None,
                }
            }
            Message::Design(message) => {
                design_picker::apply(&mut self.design_id, &mut self.custom_colors, message);
                None
            }
            Message::Preview(message) => {
                match self.preview.update(message, &self.event) {
                    Some(preview_messages::Event::LayoutChanged(layout)) => {
                        Some(Event::LayoutChanged(layout))
                    }
                    None => None,
                }
            }
            Message::ImagePicked(target, path) => {
                match target {
                    ImageTarget::Event => {
                        self.background_handle = path.as_ref().map(image::Handle::from_path);
                        self.event.event_image = path;
                    }
                    ImageTarget::Ticket => {
                        self.event.ticket_image = path.clone();
                        let _ = self.preview.update(
                            preview_messages::Message::OverlaySourceChanged(path),
                            &self.event,
                        );
                    }
                }
                None
            }
            Message::RegenerateTicketId => {
                self.regenerate_ticket_id();
                None
            }
            Message::ExportRequested(format) => Some(Event::Export {
                format,
                suggested_name: crate::export::default_file_name(&self.event, format),
            }),
            Message::SaveEventRequested => {
                let saved = self.to_saved_event();
                self.saved_id = Some(saved.id.clone());
                Some(Event::SaveEvent(saved))
            }
            Message::ResetLayout => {
                match self
                    .preview
                    .update(preview_messages::Message::ResetSections, &self.event)
                {
                    Some(preview_messages::Event::LayoutChanged(layout)) => {
                        Some(Event::LayoutChanged(layout))
                    }
                    None => None,
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = scrollable(
            column![
                card(form::view(&self.event, self.ticket_count).map(Message::Form)),
                card(
                    design_picker::view(&self.design_id, &self.custom_colors)
                        .map(Message::Design)
                ),
                card(self.actions()),
            ]
            .spacing(spacing::LG)
            .padding(spacing::MD),
        )
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill);

        let preview_view = self
            .preview
            .view(preview::ViewContext {
                event: &self.event,
                colors: self.effective_colors(),
                ticket_id: &self.ticket_id,
                code: &self.code,
                background: self.background_handle.as_ref(),
            })
            .map(Message::Preview);

        let preview_area = column![
            preview_view,
            text("Drag sections and the ticket image to rearrange the layout")
                .size(typography::CAPTION)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(theme::muted_text_color()),
                }),
            button(text("Reset Layout").size(typography::CAPTION)).on_press(Message::ResetLayout),
        ]
        .spacing(spacing::SM)
        .align_x(iced::alignment::Horizontal::Center);

        row![
            sidebar,
            container(preview_area)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center)
                .align_y(iced::alignment::Vertical::Center),
        ]
        .into()
    }

    fn actions(&self) -> Element<'_, Message> {
        let ready = self.event.is_export_ready();
        let export_button = |label, format| {
            let base = button(text(label).size(typography::BODY));
            if ready {
                base.on_press(Message::ExportRequested(format))
            } else {
                base
            }
        };
        let save_button = {
            let base = button(text("Save to Library").size(typography::BODY));
            if ready {
                base.on_press(Message::SaveEventRequested)
            } else {
                base
            }
        };

        let mut actions = column![
            text("Export").size(typography::TITLE_SM),
            row![
                export_button("Download PNG", ExportFormat::Png),
                export_button("Download JPG", ExportFormat::Jpeg),
            ]
            .spacing(spacing::SM),
            save_button,
        ]
        .spacing(spacing::SM);

        if !ready {
            actions = actions.push(
                text("Fill in the event name, venue and date to export")
                    .size(typography::CAPTION)
                    .style(|_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(theme::error_text_color()),
                    }),
            );
        }

        actions.into()
    }
}

fn card(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(spacing::MD)
        .style(theme::card_style)
        .into()
}
