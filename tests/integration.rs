// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows across persistence, the designer, and the exporter.

use std::path::PathBuf;

use tempfile::tempdir;
use ticket_studio::app::persisted_state::PersistedState;
use ticket_studio::config::{self, Config, ThemeMode};
use ticket_studio::export::{self, ExportFormat};
use ticket_studio::library::Library;
use ticket_studio::ui::designer::{self, form, ImageTarget};

fn designer_with_event() -> designer::State {
    let mut state = designer::State::new();
    for message in [
        form::Message::EventNameChanged("Cup Final".into()),
        form::Message::VenueChanged("Grand Arena".into()),
        form::Message::DateChanged("2026-11-22".into()),
        form::Message::TimeChanged("19:00".into()),
        form::Message::SeatSectionChanged("A1".into()),
        form::Message::SeatRowChanged("12".into()),
        form::Message::SeatNumberChanged("15".into()),
        form::Message::PriceChanged("49.99".into()),
    ] {
        state.update(designer::Message::Form(message));
    }
    state
}

#[test]
fn test_config_round_trip_preserves_preferences() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        theme_mode: ThemeMode::Dark,
        export_scale: Some(4.0),
        default_design: Some("vibrant".to_string()),
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.effective_export_scale(), 4.0);
    assert_eq!(loaded.default_design.as_deref(), Some("vibrant"));
}

#[test]
fn test_corrupt_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(&config_path, "theme_mode = 17\n!!!").expect("Failed to write file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.theme_mode, ThemeMode::System);
    assert_eq!(loaded.export_scale, Config::default().export_scale);
    assert!(loaded.default_design.is_none());
}

#[test]
fn test_saved_event_survives_library_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let mut state = designer_with_event();
    let Some(designer::Event::SaveEvent(saved)) =
        state.update(designer::Message::SaveEventRequested)
    else {
        panic!("expected a save event");
    };

    let mut library = Library::default();
    library.upsert(saved.clone());
    assert!(library.save_to(base.clone()).is_none());

    let (reloaded, warning) = Library::load_from(base);
    assert!(warning.is_none());
    assert_eq!(reloaded.events.len(), 1);

    let restored = reloaded.find(&saved.id).expect("event should be present");
    assert_eq!(restored.title, "Cup Final");
    assert_eq!(restored.venue, "Grand Arena");
    assert_eq!(restored.seat_number, "15");
    assert_eq!(restored.ticket_count, 1);
}

#[test]
fn test_reopened_event_restores_the_designer() {
    let mut state = designer_with_event();
    let Some(designer::Event::SaveEvent(saved)) =
        state.update(designer::Message::SaveEventRequested)
    else {
        panic!("expected a save event");
    };

    let mut fresh = designer::State::new();
    fresh.load_saved(&saved);
    assert_eq!(fresh.event().event_name, "Cup Final");
    assert_eq!(fresh.event().seat_section, "A1");
    assert!(fresh.event().is_export_ready());
}

#[test]
fn test_deleting_an_event_is_persisted() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let mut state = designer_with_event();
    let Some(designer::Event::SaveEvent(saved)) =
        state.update(designer::Message::SaveEventRequested)
    else {
        panic!("expected a save event");
    };

    let mut library = Library::default();
    library.upsert(saved.clone());
    assert!(library.save_to(base.clone()).is_none());

    assert!(library.remove(&saved.id));
    assert!(library.save_to(base.clone()).is_none());

    let (reloaded, _) = Library::load_from(base);
    assert!(reloaded.events.is_empty());
}

#[test]
fn test_session_state_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let state = PersistedState {
        last_export_directory: Some(PathBuf::from("/tmp/exports")),
        last_image_directory: None,
        selected_event_id: Some("ev-123".to_string()),
    };
    assert!(state.save_to(base.clone()).is_none());

    let (reloaded, warning) = PersistedState::load_from(base);
    assert!(warning.is_none());
    assert_eq!(reloaded, state);
}

#[test]
fn test_export_from_designer_with_overlay() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // A small overlay image the exporter has to composite in.
    let overlay_path = dir.path().join("logo.png");
    let overlay = image_rs::RgbaImage::from_pixel(10, 10, image_rs::Rgba([255, 0, 0, 255]));
    overlay.save(&overlay_path).expect("Failed to write overlay");

    let mut state = designer_with_event();
    state.update(designer::Message::ImagePicked(
        ImageTarget::Ticket,
        Some(overlay_path),
    ));

    let destination = dir.path().join("ticket.png");
    let request = state.export_request(destination.clone(), 2.0);
    assert_eq!(
        ExportFormat::from_path(&request.destination),
        ExportFormat::Png
    );

    let written = export::export_ticket(&request).expect("export should succeed");
    assert_eq!(written, destination);

    let exported = image_rs::open(&destination).expect("Failed to reopen export");
    assert_eq!(exported.width(), 1200);
    assert_eq!(exported.height(), 600);
}

#[test]
fn test_jpeg_export_drops_the_alpha_channel() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let destination = dir.path().join("ticket.jpg");

    let state = designer_with_event();
    let request = state.export_request(destination.clone(), 1.0);
    export::export_ticket(&request).expect("export should succeed");

    let exported = image_rs::open(&destination).expect("Failed to reopen export");
    assert_eq!(exported.color(), image_rs::ColorType::Rgb8);
}
