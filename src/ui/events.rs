// SPDX-License-Identifier: MPL-2.0
//! Events screen: browse, reopen and delete saved events.

use crate::library::{Library, SavedEvent};
use crate::ticket::{format_date, format_time};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Element, Length, Theme};

/// Which slice of the library is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Upcoming,
    Past,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    EventSelected(String),
    OpenInDesigner(String),
    DeleteEvent(String),
}

/// Requests for the app shell.
#[derive(Debug, Clone)]
pub enum Event {
    /// Remember the selection across sessions.
    Selected(String),
    /// Load the event into the designer and switch screens.
    Open(String),
    /// Remove the event from the library.
    Delete(String),
}

#[derive(Debug, Default)]
pub struct State {
    tab: Tab,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                None
            }
            Message::EventSelected(id) => Some(Event::Selected(id)),
            Message::OpenInDesigner(id) => Some(Event::Open(id)),
            Message::DeleteEvent(id) => Some(Event::Delete(id)),
        }
    }

    pub fn view<'a>(
        &self,
        library: &'a Library,
        today: chrono::NaiveDate,
        selected_id: Option<&'a str>,
    ) -> Element<'a, Message> {
        let tab_button = |label, tab: Tab| {
            let is_active = self.tab == tab;
            button(text(label).size(typography::BODY))
                .on_press(Message::TabSelected(tab))
                .style(move |theme: &Theme, status| tab_style(theme, status, is_active))
        };

        let tabs = row![
            tab_button("Upcoming", Tab::Upcoming),
            tab_button("Past", Tab::Past),
        ]
        .spacing(spacing::SM);

        let events: Vec<&SavedEvent> = library
            .events
            .iter()
            .filter(|event| match self.tab {
                Tab::Upcoming => event.is_upcoming(today),
                Tab::Past => !event.is_upcoming(today),
            })
            .collect();

        let mut list = Column::new().spacing(spacing::SM);
        if events.is_empty() {
            list = list.push(
                text(match self.tab {
                    Tab::Upcoming => "No upcoming events yet. Create one in the designer.",
                    Tab::Past => "No past events.",
                })
                .size(typography::BODY)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(theme::muted_text_color()),
                }),
            );
        }
        for event in events {
            list = list.push(event_card(event, selected_id == Some(event.id.as_str())));
        }

        column![
            text("My Events").size(typography::TITLE_LG),
            tabs,
            scrollable(list).height(Length::Fill),
        ]
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .into()
    }
}

fn event_card(event: &SavedEvent, selected: bool) -> Element<'_, Message> {
    let when = format!(
        "{} \u{b7} {}",
        format_date(&event.date),
        format_time(&event.time)
    );

    let details = column![
        text(&event.title).size(typography::TITLE_SM),
        text(&event.venue).size(typography::BODY),
        text(when).size(typography::CAPTION).style(|_theme: &Theme| {
            iced::widget::text::Style {
                color: Some(theme::muted_text_color()),
            }
        }),
        text(format!(
            "{} \u{b7} {} ticket(s)",
            event.category, event.ticket_count
        ))
        .size(typography::CAPTION),
    ]
    .spacing(spacing::XXS)
    .width(Length::Fill);

    let actions = column![
        button(text("Open").size(typography::CAPTION))
            .on_press(Message::OpenInDesigner(event.id.clone())),
        button(text("Delete").size(typography::CAPTION))
            .on_press(Message::DeleteEvent(event.id.clone())),
    ]
    .spacing(spacing::XXS);

    let card = button(
        row![details, actions]
            .spacing(spacing::MD)
            .align_y(iced::alignment::Vertical::Center),
    )
    .on_press(Message::EventSelected(event.id.clone()))
    .width(Length::Fill)
    .style(move |theme: &Theme, _status| card_button_style(theme, selected));

    container(card).width(Length::Fill).into()
}

fn tab_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let palette = theme.extended_palette();
    let background = if active {
        palette.primary.base.color
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => palette.background.weak.color,
            _ => palette.background.base.color,
        }
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: if active {
            palette.primary.base.text
        } else {
            palette.background.base.text
        },
        border: iced::Border {
            radius: crate::ui::design_tokens::radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

fn card_button_style(theme: &Theme, selected: bool) -> button::Style {
    let palette = theme.extended_palette();
    button::Style {
        background: Some(iced::Background::Color(if selected {
            palette.primary.weak.color
        } else {
            palette.background.weak.color
        })),
        text_color: palette.background.base.text,
        border: iced::Border {
            radius: crate::ui::design_tokens::radius::MD.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}
