// SPDX-License-Identifier: MPL-2.0
//! Tickets screen: every ticket derived from the saved events.

use crate::library::Library;
use crate::ticket::format_date;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::{button, column, row, scrollable, text, Column};
use iced::{Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    OpenEvent(String),
}

/// Requests for the app shell.
#[derive(Debug, Clone)]
pub enum Event {
    /// Load the ticket's event into the designer.
    Open(String),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::OpenEvent(id) => Event::Open(id),
    }
}

pub fn view(library: &Library) -> Element<'_, Message> {
    let mut list = Column::new().spacing(spacing::MD);

    if library.events.is_empty() {
        list = list.push(
            text("No tickets yet. Save an event in the designer first.")
                .size(typography::BODY)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(theme::muted_text_color()),
                }),
        );
    }

    for event in &library.events {
        let mut group = Column::new()
            .spacing(spacing::XXS)
            .push(
                row![
                    text(&event.title).size(typography::TITLE_SM).width(Length::Fill),
                    button(text("Open").size(typography::CAPTION))
                        .on_press(Message::OpenEvent(event.id.clone())),
                ]
                .align_y(iced::alignment::Vertical::Center),
            )
            .push(
                text(format!("{} \u{b7} {}", event.venue, format_date(&event.date)))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| iced::widget::text::Style {
                        color: Some(theme::muted_text_color()),
                    }),
            );

        for ticket in event.derived_tickets() {
            let seat = if ticket.section.is_empty() && ticket.row.is_empty() {
                ticket.seat_type.clone()
            } else {
                format!("Sec {} \u{b7} Row {} \u{b7} Seat {}", ticket.section, ticket.row, ticket.seat)
            };
            let price = if ticket.price.is_empty() {
                String::new()
            } else {
                format!("  ${}", ticket.price)
            };
            group = group.push(text(format!("{seat}{price}")).size(typography::BODY));
        }

        list = list.push(group);
    }

    column![
        text("My Tickets").size(typography::TITLE_LG),
        scrollable(list).height(Length::Fill),
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG)
    .into()
}
