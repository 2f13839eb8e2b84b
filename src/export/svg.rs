// SPDX-License-Identifier: MPL-2.0
//! Builds the SVG document that mirrors the live preview.
//!
//! The exporter renders the ticket from the committed layout rather than
//! screenshotting the canvas, so the output is resolution independent. The
//! overlay image is not part of the SVG; it is composited onto the raster
//! afterwards.

use crate::ticket::design::ColorScheme;
use crate::ticket::qr::{self, CodeMatrix};
use crate::ticket::{format_date, format_time, EventData};
use crate::ui::preview::layout::{OverlayBox, SectionLayout};
use crate::ui::preview::sections::SectionId;
use std::fmt::Write;

/// Logical ticket size; must match the preview surface.
pub const TICKET_WIDTH: f32 = 600.0;
pub const TICKET_HEIGHT: f32 = 300.0;

const MODULE_SIZE: f32 = 4.0;
const CODE_PADDING: f32 = 4.0;

/// Everything needed to lay the ticket out.
pub struct TicketScene<'a> {
    pub event: &'a EventData,
    pub colors: &'a ColorScheme,
    pub ticket_id: &'a str,
    pub code: &'a CodeMatrix,
    pub layout: &'a SectionLayout,
    /// Skip the gradient backdrop; the caller composites a background
    /// image beneath the rasterized document instead.
    pub transparent: bool,
    /// Committed overlay box, when an overlay image is active.
    pub overlay: Option<OverlayBox>,
}

/// Renders the scene as an SVG document string.
pub fn build(scene: &TicketScene<'_>) -> String {
    let mut svg = String::with_capacity(4096);

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{TICKET_WIDTH}" height="{TICKET_HEIGHT}" viewBox="0 0 {TICKET_WIDTH} {TICKET_HEIGHT}">"#
    );

    if !scene.transparent {
        let _ = write!(
            svg,
            r#"<defs><linearGradient id="bg" x1="0" y1="0" x2="1" y2="0"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient></defs>"#,
            escape(&scene.colors.primary),
            escape(&scene.colors.secondary),
        );
        let _ = write!(
            svg,
            r#"<rect width="{TICKET_WIDTH}" height="{TICKET_HEIGHT}" fill="url(#bg)"/>"#
        );
    }

    for &id in &SectionId::ALL {
        if id.is_visible(scene.event) {
            write_section(&mut svg, scene, id);
        }
    }

    if let Some(overlay) = scene.overlay {
        let _ = write!(
            svg,
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#ffffff" stroke-width="2"/>"##,
            overlay.x, overlay.y, overlay.width, overlay.height,
        );
    }

    svg.push_str("</svg>");
    svg
}

fn write_section(svg: &mut String, scene: &TicketScene<'_>, id: SectionId) {
    let Some(position) = scene.layout.get(&id) else {
        return;
    };
    let (x, y) = (position.x, position.y);
    let text_fill = escape(&scene.colors.text);

    // Stable per-section ids let external tooling locate elements in the
    // exported document.
    let _ = write!(svg, r#"<g id="section-{}">"#, id.key());

    match id {
        SectionId::EventName => {
            write_text(
                svg,
                x,
                y + 18.0,
                18.0,
                &text_fill,
                true,
                &placeholder(&scene.event.event_name, "Event Name"),
            );
        }
        SectionId::Venue => {
            write_text(
                svg,
                x,
                y + 14.0,
                14.0,
                &text_fill,
                false,
                &placeholder(&scene.event.venue, "Venue Name"),
            );
        }
        SectionId::DateTime => {
            let content = format!(
                "{} \u{b7} {}",
                format_date(&scene.event.date),
                format_time(&scene.event.time)
            );
            write_text(svg, x, y + 14.0, 14.0, &text_fill, false, &content);
        }
        SectionId::Category => {
            let label = scene.event.category.to_string().to_uppercase();
            let badge_width = 14.0 + label.len() as f32 * 8.0;
            let _ = write!(
                svg,
                r#"<rect x="{x}" y="{y}" width="{badge_width}" height="22" rx="4" fill="{}"/>"#,
                escape(&scene.colors.accent),
            );
            write_text(svg, x + 7.0, y + 16.0, 12.0, "#000000", true, &label);
        }
        SectionId::SeatInfo => {
            write_text(svg, x, y + 14.0, 14.0, &text_fill, false, &scene.event.seat_label());
            if !scene.event.seat_type.is_empty() {
                write_text(
                    svg,
                    x,
                    y + 30.0,
                    12.0,
                    &text_fill,
                    false,
                    &scene.event.seat_type,
                );
            }
        }
        SectionId::Price => {
            let content = format!("${}", scene.event.price);
            write_text(svg, x, y + 18.0, 18.0, &escape(&scene.colors.accent), true, &content);
        }
        SectionId::TicketId => {
            let content = format!("#{}", scene.ticket_id);
            write_text(svg, x, y + 12.0, 12.0, &text_fill, false, &content);
        }
        SectionId::QrCode => {
            write_code_matrix(svg, scene.code, x, y);
        }
    }

    svg.push_str("</g>");
}

fn write_code_matrix(svg: &mut String, code: &CodeMatrix, x: f32, y: f32) {
    let side = qr::MODULES as f32 * MODULE_SIZE + CODE_PADDING * 2.0;
    let _ = write!(
        svg,
        r##"<rect x="{x}" y="{y}" width="{side}" height="{side}" fill="#ffffff"/>"##
    );

    for my in 0..qr::MODULES {
        for mx in 0..qr::MODULES {
            if code.get(mx, my) {
                let _ = write!(
                    svg,
                    r##"<rect x="{}" y="{}" width="{MODULE_SIZE}" height="{MODULE_SIZE}" fill="#000000"/>"##,
                    x + CODE_PADDING + mx as f32 * MODULE_SIZE,
                    y + CODE_PADDING + my as f32 * MODULE_SIZE,
                );
            }
        }
    }
}

fn write_text(
    svg: &mut String,
    x: f32,
    y: f32,
    size: f32,
    fill: &str,
    bold: bool,
    content: &str,
) {
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    let _ = write!(
        svg,
        r#"<text x="{x}" y="{y}" font-family="sans-serif" font-size="{size}" fill="{fill}"{weight}>{}</text>"#,
        escape(content),
    );
}

fn placeholder(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Escapes text for inclusion in SVG markup.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::preview::layout::GeometryModel;

    fn scene_parts() -> (EventData, ColorScheme, CodeMatrix, SectionLayout) {
        let event = EventData {
            event_name: "Cup Final".into(),
            venue: "Grand Arena".into(),
            date: "2026-11-22".into(),
            ..EventData::default()
        };
        let colors = ColorScheme::default();
        let code = CodeMatrix::from_payload("TKT-TEST");
        let layout = GeometryModel::new().positions();
        (event, colors, code, layout)
    }

    #[test]
    fn document_contains_event_fields() {
        let (event, colors, code, layout) = scene_parts();
        let svg = build(&TicketScene {
            event: &event,
            colors: &colors,
            ticket_id: "TKT-ABC123DEF",
            code: &code,
            layout: &layout,
            transparent: false,
            overlay: None,
        });

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Cup Final"));
        assert!(svg.contains("Grand Arena"));
        assert!(svg.contains("#TKT-ABC123DEF"));
        assert!(svg.contains(r#"<g id="section-eventName">"#));
    }

    #[test]
    fn text_is_escaped() {
        let (mut event, colors, code, layout) = scene_parts();
        event.event_name = "Rock & Roll <Live>".into();
        let svg = build(&TicketScene {
            event: &event,
            colors: &colors,
            ticket_id: "TKT-X",
            code: &code,
            layout: &layout,
            transparent: false,
            overlay: None,
        });

        assert!(svg.contains("Rock &amp; Roll &lt;Live&gt;"));
        assert!(!svg.contains("<Live>"));
    }

    #[test]
    fn hidden_sections_are_omitted() {
        let (event, colors, code, layout) = scene_parts();
        let svg = build(&TicketScene {
            event: &event,
            colors: &colors,
            ticket_id: "TKT-X",
            code: &code,
            layout: &layout,
            transparent: false,
            overlay: None,
        });

        // Price is empty, so no dollar amount is rendered.
        assert!(!svg.contains('$'));
    }

    #[test]
    fn transparent_scene_omits_the_gradient() {
        let (event, colors, code, layout) = scene_parts();
        let svg = build(&TicketScene {
            event: &event,
            colors: &colors,
            ticket_id: "TKT-X",
            code: &code,
            layout: &layout,
            transparent: true,
            overlay: None,
        });

        assert!(!svg.contains("url(#bg)"));
        assert!(!svg.contains("linearGradient"));
        assert!(svg.contains("Cup Final"));
    }

    #[test]
    fn overlay_box_adds_a_border_rect() {
        let (event, colors, code, layout) = scene_parts();
        let with_overlay = build(&TicketScene {
            event: &event,
            colors: &colors,
            ticket_id: "TKT-X",
            code: &code,
            layout: &layout,
            transparent: false,
            overlay: Some(OverlayBox::DEFAULT),
        });
        let without = build(&TicketScene {
            event: &event,
            colors: &colors,
            ticket_id: "TKT-X",
            code: &code,
            layout: &layout,
            transparent: false,
            overlay: None,
        });

        assert!(with_overlay.contains(r##"stroke="#ffffff""##));
        assert!(with_overlay.len() > without.len());
    }
}
