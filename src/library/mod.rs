// SPDX-License-Identifier: MPL-2.0
//! Locally persisted event library.
//!
//! The original prototype kept created events in the browser's local storage;
//! here they live in a `library.cbor` file in the app data directory. Only
//! scalar event fields are persisted — preview geometry is session state and
//! is deliberately not written out.
//!
//! Load failures never abort startup: they degrade to an empty library plus a
//! warning message the caller can surface as a notification.

use crate::app::paths;
use crate::ticket::design::ColorScheme;
use crate::ticket::TicketCategory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Library file name within the app data directory.
const LIBRARY_FILE: &str = "library.cbor";

/// A created event, as shown on the Events screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedEvent {
    pub id: String,
    pub title: String,
    pub venue: String,
    /// ISO date (`YYYY-MM-DD`) as entered in the form.
    pub date: String,
    pub time: String,
    pub category: TicketCategory,
    pub ticket_type: String,
    pub seat_section: String,
    pub seat_row: String,
    pub seat_number: String,
    pub seat_type: String,
    pub price: String,
    pub ticket_count: u32,
    pub design_id: String,
    pub colors: ColorScheme,
}

impl SavedEvent {
    /// Whether the event date is today or later.
    pub fn is_upcoming(&self, today: chrono::NaiveDate) -> bool {
        match chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            Ok(date) => date >= today,
            // Undated events stay visible in the upcoming tab.
            Err(_) => true,
        }
    }

    /// Derives the individual tickets for this event. Seat numbers count up
    /// from the entered base seat, one per ticket.
    pub fn derived_tickets(&self) -> Vec<DerivedTicket> {
        let base_seat: u32 = self.seat_number.parse().unwrap_or(1);
        (0..self.ticket_count.max(1))
            .map(|index| DerivedTicket {
                event_id: self.id.clone(),
                section: self.seat_section.clone(),
                row: self.seat_row.clone(),
                seat: base_seat.saturating_add(index).to_string(),
                seat_type: self.seat_type.clone(),
                price: self.price.clone(),
            })
            .collect()
    }
}

/// One ticket derived from a saved event, shown on the Tickets screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTicket {
    pub event_id: String,
    pub section: String,
    pub row: String,
    pub seat: String,
    pub seat_type: String,
    pub price: String,
}

/// All saved events, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub events: Vec<SavedEvent>,
}

impl Library {
    /// Loads the library from the default location.
    ///
    /// Returns `(library, optional_warning)`. A missing file is not a
    /// warning; a corrupt or unreadable one is.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the library from a custom directory (tests, portable installs).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::library_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(library) => (library, None),
                    Err(_) => (
                        Self::default(),
                        Some("Saved events could not be read and were reset".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("Saved events file could not be opened".to_string()),
            ),
        }
    }

    /// Saves the library to the default location, creating the parent
    /// directory if needed. Returns an optional warning message on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the library to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::library_file_path(base_dir) else {
            return Some("No data directory available to save events".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("Could not create the data directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("Saved events could not be written".to_string());
                }
                None
            }
            Err(_) => Some("Saved events file could not be created".to_string()),
        }
    }

    fn library_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(LIBRARY_FILE);
            path
        })
    }

    /// Inserts a new event at the front, replacing any event with the same id.
    pub fn upsert(&mut self, event: SavedEvent) {
        self.events.retain(|existing| existing.id != event.id);
        self.events.insert(0, event);
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        self.events.len() != before
    }

    pub fn find(&self, id: &str) -> Option<&SavedEvent> {
        self.events.iter().find(|event| event.id == id)
    }
}
