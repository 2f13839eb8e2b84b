// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the designer, the event library and the
//! persisted preferences, and translates component events into side effects
//! like file dialogs, exports and library writes. Policy decisions (window
//! sizing, persistence formats, notification wording) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::library::Library;
use crate::ui::designer;
use crate::ui::events;
use crate::ui::notifications;
use crate::ui::preview::layout::{GeometryModel, SectionLayout};
use iced::{time, window, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Root Iced application state bridging UI components and persisted data.
pub struct App {
    screen: Screen,
    designer: designer::State,
    events: events::State,
    library: Library,
    /// Last layout broadcast by the preview; newer broadcasts replace older
    /// ones wholesale.
    section_layout: SectionLayout,
    config: Config,
    /// Persisted application state (last directories, selection).
    app_state: persisted_state::PersistedState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("saved_events", &self.library.events.len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Designer,
            designer: designer::State::new(),
            events: events::State::new(),
            library: Library::default(),
            section_layout: GeometryModel::new().positions(),
            config: Config::default(),
            app_state: persisted_state::PersistedState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from disk.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let mut app = App::default();

        app.config = config::load().unwrap_or_default();
        if let Some(design_id) = app.config.default_design.clone() {
            app.designer.set_design(design_id);
        }

        let (library, library_warning) = Library::load();
        app.library = library;

        let (app_state, state_warning) = persisted_state::PersistedState::load();
        app.app_state = app_state;

        for warning in [library_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Ticket Studio".to_string()
    }

    fn theme(&self) -> Theme {
        if self.config.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_notifications() {
            time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for the boot closure; the RefCell lets the
    // one-shot flags satisfy that.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
