// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message, Screen};
use crate::config;
use crate::export::{self, ExportFormat, ExportRequest};
use crate::ui::designer;
use crate::ui::events;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::tickets;
use iced::Task;
use std::path::PathBuf;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => {
                let navbar::Event::SwitchScreen(screen) = navbar::update(message);
                self.screen = screen;
                Task::none()
            }
            Message::Designer(message) => {
                let event = self.designer.update(message);
                self.handle_designer_event(event)
            }
            Message::Events(message) => {
                let event = self.events.update(message);
                self.handle_events_event(event)
            }
            Message::Tickets(message) => {
                let tickets::Event::Open(id) = tickets::update(message);
                self.open_saved_event(&id);
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
            Message::ImageDialogResult(target, path) => {
                if let Some(path) = &path {
                    self.app_state.last_image_directory =
                        path.parent().map(PathBuf::from);
                    self.persist_app_state();
                }
                let event = self
                    .designer
                    .update(designer::Message::ImagePicked(target, path));
                self.handle_designer_event(event)
            }
            Message::ExportDialogResult(path) => {
                let Some(destination) = path else {
                    return Task::none();
                };

                self.app_state.last_export_directory =
                    destination.parent().map(PathBuf::from);
                self.persist_app_state();

                let request = self.build_export_request(destination);
                Task::perform(
                    async move { export::export_ticket(&request) },
                    Message::ExportCompleted,
                )
            }
            Message::ExportCompleted(result) => {
                match result {
                    Ok(path) => {
                        self.notifications.push(Notification::success(format!(
                            "Ticket exported to {}",
                            path.display()
                        )));
                    }
                    Err(error) => {
                        self.notifications.push(Notification::error(format!(
                            "Export failed: {error}"
                        )));
                    }
                }
                Task::none()
            }
        }
    }

    fn handle_designer_event(&mut self, event: Option<designer::Event>) -> Task<Message> {
        match event {
            Some(designer::Event::PickImage(target)) => {
                let start_dir = self.app_state.last_image_directory.clone();
                Task::perform(pick_image_dialog(start_dir), move |path| {
                    Message::ImageDialogResult(target, path)
                })
            }
            Some(designer::Event::Export {
                format,
                suggested_name,
            }) => {
                let start_dir = self.app_state.last_export_directory.clone();
                Task::perform(
                    save_export_dialog(start_dir, suggested_name, format),
                    Message::ExportDialogResult,
                )
            }
            Some(designer::Event::SaveEvent(saved)) => {
                let title = saved.title.clone();
                self.remember_default_design(&saved.design_id);
                self.library.upsert(saved);
                if let Some(warning) = self.library.save() {
                    self.notifications.push(Notification::warning(warning));
                } else {
                    self.notifications
                        .push(Notification::success(format!("Saved \"{title}\"")));
                }
                Task::none()
            }
            Some(designer::Event::LayoutChanged(layout)) => {
                self.section_layout = layout;
                Task::none()
            }
            None => Task::none(),
        }
    }

    fn handle_events_event(&mut self, event: Option<events::Event>) -> Task<Message> {
        match event {
            Some(events::Event::Selected(id)) => {
                self.app_state.selected_event_id = Some(id);
                self.persist_app_state();
            }
            Some(events::Event::Open(id)) => {
                self.open_saved_event(&id);
            }
            Some(events::Event::Delete(id)) => {
                if self.library.remove(&id) {
                    if self.app_state.selected_event_id.as_deref() == Some(id.as_str()) {
                        self.app_state.selected_event_id = None;
                        self.persist_app_state();
                    }
                    if let Some(warning) = self.library.save() {
                        self.notifications.push(Notification::warning(warning));
                    } else {
                        self.notifications
                            .push(Notification::info("Event deleted"));
                    }
                }
            }
            None => {}
        }
        Task::none()
    }

    /// Loads a library event into the designer and switches to it.
    fn open_saved_event(&mut self, id: &str) {
        match self.library.find(id) {
            Some(saved) => {
                let saved = saved.clone();
                self.designer.load_saved(&saved);
                self.screen = Screen::Designer;
            }
            None => {
                self.notifications
                    .push(Notification::error("That event no longer exists"));
            }
        }
    }

    /// Assembles the export job, using the layout snapshot the app tracked
    /// from preview broadcasts.
    fn build_export_request(&self, destination: PathBuf) -> ExportRequest {
        let mut request = self
            .designer
            .export_request(destination, self.config.effective_export_scale());
        request.layout = self.section_layout.clone();
        request
    }

    /// The design used for the latest saved event becomes the default the
    /// next time the app starts.
    fn remember_default_design(&mut self, design_id: &str) {
        if self.config.default_design.as_deref() == Some(design_id) {
            return;
        }
        self.config.default_design = Some(design_id.to_string());
        if config::save(&self.config).is_err() {
            self.notifications
                .push(Notification::warning("Settings could not be saved"));
        }
    }

    fn persist_app_state(&mut self) {
        if let Some(warning) = self.app_state.save() {
            self.notifications.push(Notification::warning(warning));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::paths;
    use crate::ui::preview::layout::GeometryModel;
    use crate::ui::preview::sections::SectionId;
    use tempfile::tempdir;

    #[test]
    fn export_uses_the_broadcast_layout_snapshot() {
        let mut app = App::default();

        let mut model = GeometryModel::new();
        model.set_container(iced::Size::new(600.0, 300.0));
        model.move_section(SectionId::EventName, 200.0, 120.0);
        let layout = model.positions();

        let _ = app.handle_designer_event(Some(designer::Event::LayoutChanged(layout.clone())));
        assert_eq!(app.section_layout, layout);

        let request = app.build_export_request(PathBuf::from("/tmp/out.png"));
        assert_eq!(request.layout, layout);
        let moved = request.layout.get(&SectionId::EventName).copied().unwrap();
        assert_eq!((moved.x, moved.y), (200.0, 120.0));
    }

    #[test]
    fn saving_an_event_records_the_default_design() {
        let _lock = paths::ENV_MUTEX.lock().unwrap();
        let dir = tempdir().expect("create temp dir");
        std::env::set_var(paths::ENV_CONFIG_DIR, dir.path());

        let mut app = App::default();
        app.remember_default_design("vibrant");
        assert_eq!(app.config.default_design.as_deref(), Some("vibrant"));

        let loaded = config::load_from_path(&dir.path().join("settings.toml"))
            .expect("reload settings");
        assert_eq!(loaded.default_design.as_deref(), Some("vibrant"));

        std::env::remove_var(paths::ENV_CONFIG_DIR);
    }
}

async fn pick_image_dialog(start_dir: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp"]);
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }
    dialog
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

async fn save_export_dialog(
    start_dir: Option<PathBuf>,
    file_name: String,
    format: ExportFormat,
) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new().set_file_name(file_name);
    dialog = match format {
        ExportFormat::Png => dialog.add_filter("PNG image", &["png"]),
        ExportFormat::Jpeg => dialog.add_filter("JPEG image", &["jpg", "jpeg"]),
    };
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }
    dialog
        .save_file()
        .await
        .map(|file| file.path().to_path_buf())
}
