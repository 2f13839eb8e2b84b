// SPDX-License-Identifier: MPL-2.0
//! Ticket domain types: event data entered in the form, ticket identifiers,
//! and the date/time formatting shared by the preview and export.

pub mod design;
pub mod qr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Event category shown as the ticket's corner badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Concert,
    #[default]
    Sports,
    Theater,
    Conference,
    Other,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 5] = [
        TicketCategory::Concert,
        TicketCategory::Sports,
        TicketCategory::Theater,
        TicketCategory::Conference,
        TicketCategory::Other,
    ];
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TicketCategory::Concert => "Concert",
            TicketCategory::Sports => "Sports",
            TicketCategory::Theater => "Theater",
            TicketCategory::Conference => "Conference",
            TicketCategory::Other => "Other",
        };
        write!(f, "{label}")
    }
}

/// Initial horizontal placement bias for the overlay ticket image.
///
/// Only consulted when the user explicitly picks an anchor; a fresh image
/// always starts at the default overlay box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayAnchor {
    Left,
    #[default]
    Center,
    Right,
}

impl OverlayAnchor {
    pub const ALL: [OverlayAnchor; 3] =
        [OverlayAnchor::Left, OverlayAnchor::Center, OverlayAnchor::Right];
}

impl fmt::Display for OverlayAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OverlayAnchor::Left => "Left",
            OverlayAnchor::Center => "Center",
            OverlayAnchor::Right => "Right",
        };
        write!(f, "{label}")
    }
}

/// Everything the user types into the event form.
///
/// Owned by the designer screen; the layout core reads it but never mutates
/// it directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventData {
    pub event_name: String,
    pub venue: String,
    /// ISO date as typed (`YYYY-MM-DD`); empty until selected.
    pub date: String,
    /// 24h time as typed (`HH:MM`); empty until selected.
    pub time: String,
    pub seat_section: String,
    pub seat_row: String,
    pub seat_number: String,
    pub seat_type: String,
    pub price: String,
    pub category: TicketCategory,
    pub ticket_type: String,
    pub custom_ticket_type: String,
    pub notes: String,
    /// Optional full-bleed background image.
    pub event_image: Option<PathBuf>,
    /// Optional overlay ("ticket") image the user can drag and resize.
    pub ticket_image: Option<PathBuf>,
    pub ticket_image_anchor: OverlayAnchor,
}

impl EventData {
    /// The seat badge is shown as soon as any seat field is filled in.
    pub fn has_seat_info(&self) -> bool {
        !self.seat_section.is_empty()
            || !self.seat_row.is_empty()
            || !self.seat_number.is_empty()
    }

    /// `"A1-12-15"` style label from the non-empty seat fields.
    pub fn seat_label(&self) -> String {
        let parts: Vec<&str> = [
            self.seat_section.as_str(),
            self.seat_row.as_str(),
            self.seat_number.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            "General Admission".to_string()
        } else {
            parts.join("-")
        }
    }

    /// The effective ticket type, honoring the free-form custom field.
    pub fn effective_ticket_type(&self) -> &str {
        if self.ticket_type == "Custom" && !self.custom_ticket_type.is_empty() {
            &self.custom_ticket_type
        } else if self.ticket_type.is_empty() {
            "General Sale"
        } else {
            &self.ticket_type
        }
    }

    /// Export is only offered once the essentials are filled in.
    pub fn is_export_ready(&self) -> bool {
        !self.event_name.is_empty() && !self.venue.is_empty() && !self.date.is_empty()
    }

    /// JSON payload encoded into the ticket's code matrix.
    pub fn code_payload(&self, ticket_id: &str) -> String {
        serde_json::json!({
            "ticketId": ticket_id,
            "event": self.event_name,
            "venue": self.venue,
            "date": self.date,
            "time": self.time,
            "seat": format!("{}-{}-{}", self.seat_section, self.seat_row, self.seat_number),
        })
        .to_string()
    }
}

/// Formats an ISO date as `"Sat, Nov 22, 2024"`, or a placeholder when unset.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return "Select Date".to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%a, %b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Formats a 24h time as `"7:00 PM"`, or a placeholder when unset.
pub fn format_time(time: &str) -> String {
    if time.is_empty() {
        return "Select Time".to_string();
    }
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(parsed) => parsed.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

/// Generates a `TKT-XXXXXXXXX` identifier from the event fields and the
/// creation instant. A keyed hash keeps the original's format without a
/// dedicated RNG dependency.
pub fn generate_ticket_id(event: &EventData) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let mut hasher = blake3::Hasher::new();
    hasher.update(event.event_name.as_bytes());
    hasher.update(event.venue.as_bytes());
    hasher.update(event.date.as_bytes());
    hasher.update(event.time.as_bytes());
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    hasher.update(&nanos.to_le_bytes());

    let digest = hasher.finalize();
    let suffix: String = digest.as_bytes()[..9]
        .iter()
        .map(|byte| ALPHABET[(*byte as usize) % ALPHABET.len()] as char)
        .collect();

    format!("TKT-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_label_joins_non_empty_fields() {
        let event = EventData {
            seat_section: "A1".into(),
            seat_row: "12".into(),
            seat_number: "15".into(),
            ..EventData::default()
        };
        assert_eq!(event.seat_label(), "A1-12-15");
    }

    #[test]
    fn seat_label_skips_empty_fields() {
        let event = EventData {
            seat_section: "A1".into(),
            seat_number: "15".into(),
            ..EventData::default()
        };
        assert_eq!(event.seat_label(), "A1-15");
    }

    #[test]
    fn seat_label_falls_back_to_general_admission() {
        assert_eq!(EventData::default().seat_label(), "General Admission");
    }

    #[test]
    fn has_seat_info_reacts_to_any_field() {
        let mut event = EventData::default();
        assert!(!event.has_seat_info());
        event.seat_row = "22".into();
        assert!(event.has_seat_info());
    }

    #[test]
    fn format_date_produces_readable_string() {
        assert_eq!(format_date("2024-11-22"), "Fri, Nov 22, 2024");
        assert_eq!(format_date(""), "Select Date");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn format_time_uses_twelve_hour_clock() {
        assert_eq!(format_time("19:00"), "7:00 PM");
        assert_eq!(format_time("09:05"), "9:05 AM");
        assert_eq!(format_time(""), "Select Time");
    }

    #[test]
    fn ticket_id_has_expected_shape() {
        let id = generate_ticket_id(&EventData::default());
        assert!(id.starts_with("TKT-"));
        assert_eq!(id.len(), 13);
        assert!(id[4..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn export_ready_requires_name_venue_and_date() {
        let mut event = EventData::default();
        assert!(!event.is_export_ready());
        event.event_name = "Final".into();
        event.venue = "Stadium".into();
        assert!(!event.is_export_ready());
        event.date = "2026-06-01".into();
        assert!(event.is_export_ready());
    }

    #[test]
    fn code_payload_contains_ticket_id_and_event() {
        let event = EventData {
            event_name: "Cup Final".into(),
            ..EventData::default()
        };
        let payload = event.code_payload("TKT-ABC123DEF");
        assert!(payload.contains("TKT-ABC123DEF"));
        assert!(payload.contains("Cup Final"));
    }

    #[test]
    fn effective_ticket_type_honors_custom_field() {
        let mut event = EventData {
            ticket_type: "Custom".into(),
            custom_ticket_type: "Season Pass".into(),
            ..EventData::default()
        };
        assert_eq!(event.effective_ticket_type(), "Season Pass");
        event.custom_ticket_type.clear();
        assert_eq!(event.effective_ticket_type(), "Custom");
        event.ticket_type.clear();
        assert_eq!(event.effective_ticket_type(), "General Sale");
    }
}
