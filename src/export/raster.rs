// SPDX-License-Identifier: MPL-2.0
//! Rasterizes the exported SVG document with resvg.

use crate::error::{Error, Result};
use image_rs::RgbaImage;
use resvg::usvg;

/// Renders an SVG document at the given scale factor.
///
/// # Errors
///
/// Returns [`Error::Export`] if the document fails to parse, has empty
/// dimensions, or the target pixmap cannot be allocated.
pub fn rasterize(svg: &str, scale: f32) -> Result<RgbaImage> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| Error::Export(format!("invalid SVG document: {e}")))?;

    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;
    if width == 0 || height == 0 {
        return Err(Error::Export("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Export("failed to allocate export pixmap".into()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap_to_image(&pixmap)
}

/// Converts a premultiplied tiny-skia pixmap into a straight-alpha image.
fn pixmap_to_image(pixmap: &tiny_skia::Pixmap) -> Result<RgbaImage> {
    let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .ok_or_else(|| Error::Export("pixmap size mismatch".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;

    #[test]
    fn renders_a_solid_rectangle() {
        let image = rasterize(RED_SQUARE, 1.0).expect("rasterize");
        assert_eq!(image.dimensions(), (10, 10));
        let pixel = image.get_pixel(5, 5);
        assert_eq!(pixel.0, [255, 0, 0, 255]);
    }

    #[test]
    fn scale_factor_multiplies_dimensions() {
        let image = rasterize(RED_SQUARE, 3.0).expect("rasterize");
        assert_eq!(image.dimensions(), (30, 30));
    }

    #[test]
    fn malformed_document_is_an_export_error() {
        let result = rasterize("not svg at all", 1.0);
        assert!(matches!(result, Err(Error::Export(_))));
    }
}
