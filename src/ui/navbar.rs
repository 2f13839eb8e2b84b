// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation between the three screens.

use crate::app::Screen;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::{button, container, text, Row};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenDesigner,
    OpenEvents,
    OpenTickets,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SwitchScreen(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenDesigner => Event::SwitchScreen(Screen::Designer),
        Message::OpenEvents => Event::SwitchScreen(Screen::Events),
        Message::OpenTickets => Event::SwitchScreen(Screen::Tickets),
    }
}

/// Render the navigation bar.
pub fn view(ctx: &ViewContext) -> Element<'static, Message> {
    let tab = |label: &'static str, message: Message, screen: Screen| {
        let is_active = ctx.active == screen;
        button(text(label).size(typography::BODY))
            .on_press(message)
            .padding([spacing::XS, spacing::MD])
            .style(move |theme: &Theme, status| tab_style(theme, status, is_active))
    };

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::alignment::Vertical::Center)
        .push(
            text("Ticket Studio")
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(tab("Designer", Message::OpenDesigner, Screen::Designer))
        .push(tab("My Events", Message::OpenEvents, Screen::Events))
        .push(tab("My Tickets", Message::OpenTickets, Screen::Tickets));

    container(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            ..Default::default()
        })
        .into()
}

fn tab_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let palette = theme.extended_palette();
    let background = if active {
        palette.primary.base.color
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
            _ => palette.background.weak.color,
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
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_screens() {
        assert_eq!(
            update(Message::OpenDesigner),
            Event::SwitchScreen(Screen::Designer)
        );
        assert_eq!(
            update(Message::OpenEvents),
            Event::SwitchScreen(Screen::Events)
        );
        assert_eq!(
            update(Message::OpenTickets),
            Event::SwitchScreen(Screen::Tickets)
        );
    }
}
