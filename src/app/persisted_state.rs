// SPDX-License-Identifier: MPL-2.0
//! Small bits of UI state remembered across sessions.

use crate::app::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

const STATE_FILE: &str = "state.cbor";

/// Session state restored at startup. Everything here is a convenience;
/// losing the file loses nothing the user typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Directory the last export was written to.
    #[serde(default)]
    pub last_export_directory: Option<PathBuf>,
    /// Directory the last image was picked from.
    #[serde(default)]
    pub last_image_directory: Option<PathBuf>,
    /// Event selected on the Events screen.
    #[serde(default)]
    pub selected_event_id: Option<String>,
}

impl PersistedState {
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(_) => (
                    Self::default(),
                    Some("Session state could not be read and was reset".to_string()),
                ),
            },
            Err(_) => (
                Self::default(),
                Some("Session state file could not be opened".to_string()),
            ),
        }
    }

    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path(base_dir) else {
            return Some("No data directory available to save session state".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("Could not create the data directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("Session state could not be written".to_string());
                }
                None
            }
            Err(_) => Some("Session state file could not be created".to_string()),
        }
    }

    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}
