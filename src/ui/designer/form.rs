// SPDX-License-Identifier: MPL-2.0
//! Event details form feeding the live preview.

use crate::ticket::{EventData, OverlayAnchor, TicketCategory};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::{button, column, pick_list, row, text, text_input, Column};
use iced::{Element, Length};

/// Ticket type choices, mirrored on the printed ticket.
pub const TICKET_TYPES: [&str; 6] = [
    "General Sale",
    "VIP",
    "Early Bird",
    "Student",
    "Season Pass",
    "Custom",
];

/// Seat type choices for the seat badge.
pub const SEAT_TYPES: [&str; 4] = ["General Admission", "Reserved", "VIP", "Standing"];

#[derive(Debug, Clone)]
pub enum Message {
    EventNameChanged(String),
    VenueChanged(String),
    DateChanged(String),
    TimeChanged(String),
    CategorySelected(TicketCategory),
    TicketTypeSelected(&'static str),
    CustomTicketTypeChanged(String),
    SeatSectionChanged(String),
    SeatRowChanged(String),
    SeatNumberChanged(String),
    SeatTypeSelected(&'static str),
    PriceChanged(String),
    TicketCountChanged(String),
    NotesChanged(String),
    PickEventImage,
    PickTicketImage,
    ClearTicketImage,
    ClearEventImage,
    AnchorSelected(OverlayAnchor),
}

/// Side effects a form edit asks the owning screen to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    PickEventImage,
    PickTicketImage,
    /// The overlay image or anchor changed; the preview must be told.
    OverlayCleared,
    /// The background image was removed; the canvas must drop its handle.
    BackgroundCleared,
    AnchorChanged(OverlayAnchor),
}

/// Applies a form edit to the event data. `ticket_count` lives outside
/// [`EventData`] because it only matters when saving to the library.
pub fn apply(event: &mut EventData, ticket_count: &mut u32, message: Message) -> Option<Action> {
    match message {
        Message::EventNameChanged(value) => event.event_name = value,
        Message::VenueChanged(value) => event.venue = value,
        Message::DateChanged(value) => event.date = value,
        Message::TimeChanged(value) => event.time = value,
        Message::CategorySelected(category) => event.category = category,
        Message::TicketTypeSelected(kind) => event.ticket_type = kind.to_string(),
        Message::CustomTicketTypeChanged(value) => event.custom_ticket_type = value,
        Message::SeatSectionChanged(value) => event.seat_section = value,
        Message::SeatRowChanged(value) => event.seat_row = value,
        Message::SeatNumberChanged(value) => event.seat_number = value,
        Message::SeatTypeSelected(kind) => event.seat_type = kind.to_string(),
        Message::PriceChanged(value) => event.price = value,
        Message::TicketCountChanged(value) => {
            // Keep the previous count while the field is mid-edit.
            if value.is_empty() {
                *ticket_count = 1;
            } else if let Ok(count) = value.parse::<u32>() {
                *ticket_count = count.clamp(1, 99);
            }
        }
        Message::NotesChanged(value) => event.notes = value,
        Message::PickEventImage => return Some(Action::PickEventImage),
        Message::PickTicketImage => return Some(Action::PickTicketImage),
        Message::ClearTicketImage => {
            event.ticket_image = None;
            return Some(Action::OverlayCleared);
        }
        Message::ClearEventImage => {
            event.event_image = None;
            return Some(Action::BackgroundCleared);
        }
        Message::AnchorSelected(anchor) => {
            event.ticket_image_anchor = anchor;
            return Some(Action::AnchorChanged(anchor));
        }
    }
    None
}

pub fn view<'a>(event: &'a EventData, ticket_count: u32) -> Element<'a, Message> {
    let labeled = |label: &'a str, widget: Element<'a, Message>| {
        column![text(label).size(typography::CAPTION), widget].spacing(spacing::XXS)
    };

    let mut form = Column::new()
        .spacing(spacing::SM)
        .push(text("Event Details").size(typography::TITLE_SM))
        .push(labeled(
            "Event Name",
            text_input("Championship Final", &event.event_name)
                .on_input(Message::EventNameChanged)
                .into(),
        ))
        .push(labeled(
            "Venue",
            text_input("Grand Arena", &event.venue)
                .on_input(Message::VenueChanged)
                .into(),
        ))
        .push(row![
            labeled(
                "Date",
                text_input("YYYY-MM-DD", &event.date)
                    .on_input(Message::DateChanged)
                    .into(),
            ),
            labeled(
                "Time",
                text_input("HH:MM", &event.time)
                    .on_input(Message::TimeChanged)
                    .into(),
            ),
        ]
        .spacing(spacing::SM))
        .push(labeled(
            "Category",
            pick_list(
                TicketCategory::ALL,
                Some(event.category),
                Message::CategorySelected,
            )
            .width(Length::Fill)
            .into(),
        ))
        .push(labeled(
            "Ticket Type",
            pick_list(
                TICKET_TYPES,
                TICKET_TYPES
                    .iter()
                    .copied()
                    .find(|kind| *kind == event.ticket_type),
                Message::TicketTypeSelected,
            )
            .width(Length::Fill)
            .into(),
        ));

    if event.ticket_type == "Custom" {
        form = form.push(labeled(
            "Custom Ticket Type",
            text_input("Backstage Pass", &event.custom_ticket_type)
                .on_input(Message::CustomTicketTypeChanged)
                .into(),
        ));
    }

    form = form
        .push(text("Seating").size(typography::TITLE_SM))
        .push(
            row![
                labeled(
                    "Section",
                    text_input("A1", &event.seat_section)
                        .on_input(Message::SeatSectionChanged)
                        .into(),
                ),
                labeled(
                    "Row",
                    text_input("12", &event.seat_row)
                        .on_input(Message::SeatRowChanged)
                        .into(),
                ),
                labeled(
                    "Seat",
                    text_input("15", &event.seat_number)
                        .on_input(Message::SeatNumberChanged)
                        .into(),
                ),
            ]
            .spacing(spacing::SM),
        )
        .push(labeled(
            "Seat Type",
            pick_list(
                SEAT_TYPES,
                SEAT_TYPES
                    .iter()
                    .copied()
                    .find(|kind| *kind == event.seat_type),
                Message::SeatTypeSelected,
            )
            .width(Length::Fill)
            .into(),
        ))
        .push(
            row![
                labeled(
                    "Price ($)",
                    text_input("89.50", &event.price)
                        .on_input(Message::PriceChanged)
                        .into(),
                ),
                labeled(
                    "Tickets",
                    text_input("1", &ticket_count.to_string())
                        .on_input(Message::TicketCountChanged)
                        .into(),
                ),
            ]
            .spacing(spacing::SM),
        )
        .push(labeled(
            "Notes",
            text_input("Gate opens one hour early", &event.notes)
                .on_input(Message::NotesChanged)
                .into(),
        ))
        .push(text("Images").size(typography::TITLE_SM))
        .push(
            row![
                button(text("Ticket Image").size(typography::BODY))
                    .on_press(Message::PickTicketImage),
                button(text("Background").size(typography::BODY))
                    .on_press(Message::PickEventImage),
            ]
            .spacing(spacing::SM),
        );

    if let Some(path) = &event.ticket_image {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image");
        form = form
            .push(
                row![
                    text(name).size(typography::CAPTION).style(|_theme: &iced::Theme| {
                        iced::widget::text::Style {
                            color: Some(theme::muted_text_color()),
                        }
                    }),
                    button(text("Remove").size(typography::CAPTION))
                        .on_press(Message::ClearTicketImage),
                ]
                .spacing(spacing::SM)
                .align_y(iced::alignment::Vertical::Center),
            )
            .push(labeled(
                "Image Anchor",
                pick_list(
                    OverlayAnchor::ALL,
                    Some(event.ticket_image_anchor),
                    Message::AnchorSelected,
                )
                .width(Length::Fill)
                .into(),
            ));
    }

    if let Some(path) = &event.event_image {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image");
        form = form.push(
            row![
                text(name).size(typography::CAPTION).style(|_theme: &iced::Theme| {
                    iced::widget::text::Style {
                        color: Some(theme::muted_text_color()),
                    }
                }),
                button(text("Remove").size(typography::CAPTION))
                    .on_press(Message::ClearEventImage),
            ]
            .spacing(spacing::SM)
            .align_y(iced::alignment::Vertical::Center),
        );
    }

    form.into()
}
