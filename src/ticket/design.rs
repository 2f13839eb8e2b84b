// SPDX-License-Identifier: MPL-2.0
//! The fixed design catalog and color schemes consumed by the preview and
//! the exporter.

use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five built-in ticket designs.
///
/// The catalog is closed: adding a design means editing [`DESIGNS`], not a
/// data-driven mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketDesign {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl fmt::Display for TicketDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub const DESIGNS: [TicketDesign; 5] = [
    TicketDesign {
        id: "sporty",
        name: "Sporty",
        description: "Dynamic green and blue gradient perfect for sports events",
    },
    TicketDesign {
        id: "dark",
        name: "Dark",
        description: "Elegant dark theme with blue accents",
    },
    TicketDesign {
        id: "elegant",
        name: "Elegant",
        description: "Clean slate design with sophisticated typography",
    },
    TicketDesign {
        id: "vibrant",
        name: "Vibrant",
        description: "Bold blue to purple gradient with high energy",
    },
    TicketDesign {
        id: "custom",
        name: "Custom Colors",
        description: "Create your own unique color scheme",
    },
];

/// Looks a design up by id, falling back to the first catalog entry.
pub fn design_by_id(id: &str) -> TicketDesign {
    DESIGNS
        .iter()
        .copied()
        .find(|design| design.id == id)
        .unwrap_or(DESIGNS[0])
}

impl TicketDesign {
    /// Whether this design uses the user's custom color scheme instead of
    /// its built-in one.
    pub fn is_custom(&self) -> bool {
        self.id == "custom"
    }

    /// The built-in color scheme for this design.
    pub fn scheme(&self) -> ColorScheme {
        match self.id {
            "dark" => ColorScheme::new("#1f2937", "#111827", "#3b82f6", "#111827", "#ffffff"),
            "elegant" => ColorScheme::new("#f8fafc", "#e2e8f0", "#475569", "#f8fafc", "#0f172a"),
            "vibrant" => ColorScheme::new("#2563eb", "#9333ea", "#fbbf24", "#2563eb", "#ffffff"),
            // "sporty" and "custom" share the default green/blue base; custom
            // is overridden by the user's scheme at render time.
            _ => ColorScheme::default(),
        }
    }
}

/// Five color slots used to style the ticket chrome.
///
/// Values are hex strings (`#rrggbb`) as typed by the user; invalid input is
/// tolerated and falls back at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new("#22c55e", "#3b82f6", "#eab308", "#22c55e", "#ffffff")
    }
}

impl ColorScheme {
    pub fn new(
        primary: &str,
        secondary: &str,
        accent: &str,
        background: &str,
        text: &str,
    ) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        }
    }

    pub fn primary_color(&self) -> Color {
        parse_hex(&self.primary).unwrap_or(Color::from_rgb(0.13, 0.77, 0.37))
    }

    pub fn secondary_color(&self) -> Color {
        parse_hex(&self.secondary).unwrap_or(Color::from_rgb(0.23, 0.51, 0.96))
    }

    pub fn accent_color(&self) -> Color {
        parse_hex(&self.accent).unwrap_or(Color::from_rgb(0.92, 0.7, 0.03))
    }

    pub fn text_color(&self) -> Color {
        parse_hex(&self.text).unwrap_or(Color::WHITE)
    }
}

/// Named preset schemes offered alongside the custom color editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetScheme {
    pub name: &'static str,
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
}

impl fmt::Display for PresetScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PresetScheme {
    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::new(self.primary, self.secondary, self.accent, self.primary, "#ffffff")
    }
}

pub const PRESET_SCHEMES: [PresetScheme; 5] = [
    PresetScheme {
        name: "Sporty Green",
        primary: "#22c55e",
        secondary: "#3b82f6",
        accent: "#eab308",
    },
    PresetScheme {
        name: "Elegant Purple",
        primary: "#8b5cf6",
        secondary: "#ec4899",
        accent: "#f59e0b",
    },
    PresetScheme {
        name: "Ocean Blue",
        primary: "#06b6d4",
        secondary: "#0891b2",
        accent: "#fbbf24",
    },
    PresetScheme {
        name: "Sunset Orange",
        primary: "#f97316",
        secondary: "#ef4444",
        accent: "#fbbf24",
    },
    PresetScheme {
        name: "Midnight Dark",
        primary: "#1e293b",
        secondary: "#334155",
        accent: "#3b82f6",
    },
];

/// Parses a `#rrggbb` hex string. Returns `None` for anything else.
pub fn parse_hex(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map(|v| v as f32 / 255.0)
    };
    Some(Color::from_rgb(
        channel(0..2).ok()?,
        channel(2..4).ok()?,
        channel(4..6).ok()?,
    ))
}
