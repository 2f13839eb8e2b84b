// SPDX-License-Identifier: MPL-2.0
//! Ticket image export.
//!
//! Exports render the committed layout to an SVG scene, rasterize it at a
//! configurable scale factor, composite the overlay image on top, and write
//! PNG or JPEG. The whole pipeline is synchronous and is expected to run
//! off the UI thread.

pub mod raster;
pub mod svg;

use crate::error::{Error, Result};
use crate::ticket::design::ColorScheme;
use crate::ticket::qr::CodeMatrix;
use crate::ticket::EventData;
use crate::ui::preview::layout::{OverlayBox, SectionLayout};
use image_rs::imageops;
use std::path::{Path, PathBuf};

/// Output encodings offered in the save dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Png, ExportFormat::Jpeg];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    /// Picks the format matching a destination path, defaulting to PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
                ExportFormat::Jpeg
            }
            _ => ExportFormat::Png,
        }
    }
}

/// The overlay image and where it was committed on the surface.
#[derive(Debug, Clone)]
pub struct OverlaySnapshot {
    pub source: PathBuf,
    pub placement: OverlayBox,
}

/// A self-contained export job.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub event: EventData,
    pub colors: ColorScheme,
    pub ticket_id: String,
    pub layout: SectionLayout,
    /// Full-bleed background image, drawn beneath the sections.
    pub background: Option<PathBuf>,
    pub overlay: Option<OverlaySnapshot>,
    pub scale: f32,
    pub destination: PathBuf,
}

/// Runs the export and returns the written path.
///
/// # Errors
///
/// Returns [`Error::Export`] for rendering failures and [`Error::Io`] when
/// the destination cannot be written.
pub fn export_ticket(request: &ExportRequest) -> Result<PathBuf> {
    let code = CodeMatrix::from_payload(&request.event.code_payload(&request.ticket_id));

    let scene = svg::TicketScene {
        event: &request.event,
        colors: &request.colors,
        ticket_id: &request.ticket_id,
        code: &code,
        layout: &request.layout,
        // With a background image the gradient is omitted so the sections
        // rasterize onto a transparent backdrop.
        transparent: request.background.is_some(),
        overlay: request.overlay.as_ref().map(|snapshot| snapshot.placement),
    };

    let document = svg::build(&scene);
    let rendered = raster::rasterize(&document, request.scale)?;

    let mut image = match &request.background {
        Some(source) => composite_background(rendered, source)?,
        None => rendered,
    };

    if let Some(snapshot) = &request.overlay {
        composite_overlay(&mut image, snapshot, request.scale)?;
    }

    match ExportFormat::from_path(&request.destination) {
        ExportFormat::Png => image.save(&request.destination)?,
        // JPEG has no alpha channel.
        ExportFormat::Jpeg => {
            image_rs::DynamicImage::ImageRgba8(image)
                .to_rgb8()
                .save(&request.destination)?;
        }
    }

    Ok(request.destination.clone())
}

/// Lays the rendered sections over the background image, stretched to the
/// output size.
fn composite_background(
    rendered: image_rs::RgbaImage,
    source: &Path,
) -> Result<image_rs::RgbaImage> {
    let background = image_rs::open(source)
        .map_err(|e| Error::Export(format!("background image could not be read: {e}")))?;

    let mut base = imageops::resize(
        &background.to_rgba8(),
        rendered.width(),
        rendered.height(),
        imageops::FilterType::Triangle,
    );
    imageops::overlay(&mut base, &rendered, 0, 0);
    Ok(base)
}

/// Draws the overlay image into the rendered ticket at its committed box.
fn composite_overlay(
    base: &mut image_rs::RgbaImage,
    snapshot: &OverlaySnapshot,
    scale: f32,
) -> Result<()> {
    let overlay = image_rs::open(&snapshot.source)
        .map_err(|e| Error::Export(format!("overlay image could not be read: {e}")))?;

    let width = (snapshot.placement.width * scale).round().max(1.0) as u32;
    let height = (snapshot.placement.height * scale).round().max(1.0) as u32;
    let resized = imageops::resize(
        &overlay.to_rgba8(),
        width,
        height,
        imageops::FilterType::Triangle,
    );

    let x = (snapshot.placement.x * scale).round() as i64;
    let y = (snapshot.placement.y * scale).round() as i64;
    imageops::overlay(base, &resized, x, y);
    Ok(())
}

/// Suggested file name derived from the event name.
pub fn default_file_name(event: &EventData, format: ExportFormat) -> String {
    let base = slug(&event.event_name);
    let base = if base.is_empty() { "event".to_string() } else { base };
    format!("ticket-{base}.{}", format.extension())
}

fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_dash = false;
    for c in value.trim().chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash && !out.is_empty() {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
