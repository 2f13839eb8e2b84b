// SPDX-License-Identifier: MPL-2.0
//! The fixed set of draggable text sections on the ticket surface.

use crate::ticket::EventData;

/// Identifier for one of the eight ticket sections.
///
/// The set is closed; visibility of individual sections depends on the form
/// state, but identities and defaults never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    EventName,
    Venue,
    DateTime,
    Category,
    SeatInfo,
    Price,
    TicketId,
    QrCode,
}

impl SectionId {
    /// All sections in paint order. Later entries draw on top and win
    /// hit-testing ties.
    pub const ALL: [SectionId; 8] = [
        SectionId::EventName,
        SectionId::Venue,
        SectionId::DateTime,
        SectionId::Category,
        SectionId::SeatInfo,
        SectionId::Price,
        SectionId::TicketId,
        SectionId::QrCode,
    ];

    /// Stable string key, used when reporting layouts to the outside.
    pub fn key(self) -> &'static str {
        match self {
            SectionId::EventName => "eventName",
            SectionId::Venue => "venue",
            SectionId::DateTime => "dateTime",
            SectionId::Category => "category",
            SectionId::SeatInfo => "seatInfo",
            SectionId::Price => "price",
            SectionId::TicketId => "ticketId",
            SectionId::QrCode => "qrCode",
        }
    }

    /// Where the section sits on a fresh ticket.
    pub fn default_position(self) -> (f32, f32) {
        match self {
            SectionId::EventName => (20.0, 20.0),
            SectionId::Venue => (20.0, 60.0),
            SectionId::DateTime => (20.0, 100.0),
            SectionId::Category => (280.0, 20.0),
            SectionId::SeatInfo => (20.0, 140.0),
            SectionId::Price => (20.0, 200.0),
            SectionId::TicketId => (20.0, 220.0),
            SectionId::QrCode => (320.0, 180.0),
        }
    }

    /// Whether the section is currently shown (and draggable).
    ///
    /// Most sections are always visible with placeholder text; seat and
    /// price sections appear once their fields are filled in.
    pub fn is_visible(self, event: &EventData) -> bool {
        match self {
            SectionId::SeatInfo => event.has_seat_info(),
            SectionId::Price => !event.price.is_empty(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_order_covers_every_section_once() {
        for (i, a) in SectionId::ALL.iter().enumerate() {
            for b in &SectionId::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = SectionId::ALL.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SectionId::ALL.len());
    }

    #[test]
    fn seat_info_visibility_follows_seat_fields() {
        let mut event = EventData::default();
        assert!(!SectionId::SeatInfo.is_visible(&event));
        event.seat_row = "22".into();
        assert!(SectionId::SeatInfo.is_visible(&event));
    }

    #[test]
    fn price_visibility_follows_price_field() {
        let mut event = EventData::default();
        assert!(!SectionId::Price.is_visible(&event));
        event.price = "89.50".into();
        assert!(SectionId::Price.is_visible(&event));
    }

    #[test]
    fn always_visible_sections_ignore_form_state() {
        let event = EventData::default();
        for section in [
            SectionId::EventName,
            SectionId::Venue,
            SectionId::DateTime,
            SectionId::Category,
            SectionId::TicketId,
            SectionId::QrCode,
        ] {
            assert!(section.is_visible(&event));
        }
    }
}
