// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition: navbar, active screen, toast overlay.

use super::{App, Message, Screen};
use crate::ui::navbar;
use crate::ui::notifications::Toast;
use crate::ui::tickets;
use iced::widget::{column, container, stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let bar = navbar::view(&navbar::ViewContext {
            active: self.screen,
        })
        .map(Message::Navbar);

        let content: Element<'_, Message> = match self.screen {
            Screen::Designer => self.designer.view().map(Message::Designer),
            Screen::Events => self
                .events
                .view(
                    &self.library,
                    chrono::Local::now().date_naive(),
                    self.app_state.selected_event_id.as_deref(),
                )
                .map(Message::Events),
            Screen::Tickets => tickets::view(&self.library).map(Message::Tickets),
        };

        let layout = column![
            bar,
            container(content).width(Length::Fill).height(Length::Fill),
        ];

        stack![
            layout,
            Toast::view_overlay(&self.notifications).map(Message::Notification),
        ]
        .into()
    }
}
