//! PDF report page: branding header plus the rasterized chart.

use std::path::Path;

use printpdf::{BuiltinFont, ImageTransform, Mm, PdfDocument};

use crate::chart::{self, ChartSpec};
use crate::{ExportError, ExportMeta};

/// Literal heading used when no logo file is present on disk.
pub const FALLBACK_HEADING: &str = "Tag Dataset Creator";

const PAGE_WIDTH_MM: f64 = 297.0;
const PAGE_HEIGHT_MM: f64 = 210.0;
const MARGIN_MM: f64 = 14.0;

/// Render one landscape A4 page: header block (logo or heading, generating
/// user, generation timestamp), then the chart raster.
///
/// Exactly one artifact comes out of this, with one filename and one MIME
/// type; the caller picks the name via [`crate::pdf_filename`].
pub fn render_report(
    spec: &ChartSpec,
    meta: &ExportMeta,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, ExportError> {
    let chart_png = chart::render_png(spec, width, height)?;

    let (doc, page, layer) =
        PdfDocument::new(chart::CHART_TITLE, Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "report");
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let heading_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    // ── Header block ─────────────────────────────────────────────────
    let mut cursor = PAGE_HEIGHT_MM - MARGIN_MM;
    match load_logo(meta.logo_path.as_deref()) {
        Some(logo) => {
            cursor -= 14.0;
            let image = printpdf::Image::from_dynamic_image(&logo);
            image.add_to_layer(
                layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm(MARGIN_MM as f32)),
                    translate_y: Some(Mm(cursor as f32)),
                    ..Default::default()
                },
            );
        }
        None => {
            cursor -= 6.0;
            layer.use_text(FALLBACK_HEADING, 18.0, Mm(MARGIN_MM as f32), Mm(cursor as f32), &heading_font);
        }
    }
    cursor -= 8.0;
    layer.use_text(
        format!("Generated by: {}", meta.user_id),
        11.0,
        Mm(MARGIN_MM as f32),
        Mm(cursor as f32),
        &font,
    );
    cursor -= 6.0;
    layer.use_text(
        format!("Generated on: {}", meta.timestamp()),
        11.0,
        Mm(MARGIN_MM as f32),
        Mm(cursor as f32),
        &font,
    );

    // ── Chart raster ─────────────────────────────────────────────────
    let chart_image = image::load_from_memory(&chart_png)?;
    let image = printpdf::Image::from_dynamic_image(&chart_image);
    // At 300 dpi a 900x600 raster is 76x51 mm; scale it up to fill the page
    // width inside the margins.
    let natural_width_mm = width as f64 * 25.4 / 300.0;
    let scale = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM - 40.0) / natural_width_mm;
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN_MM as f32)),
            translate_y: Some(Mm(20.0)),
            scale_x: Some(scale as f32),
            scale_y: Some(scale as f32),
            ..Default::default()
        },
    );

    doc.save_to_bytes().map_err(pdf_err)
}

/// Read the optional branding logo. Missing or undecodable files fall back
/// to the textual heading; never fatal.
fn load_logo(path: Option<&Path>) -> Option<image::DynamicImage> {
    let path = path.filter(|p| p.exists())?;
    match image::open(path) {
        Ok(img) => Some(img),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable logo image");
            None
        }
    }
}

fn pdf_err<E: std::fmt::Display>(err: E) -> ExportError {
    ExportError::Pdf(err.to_string())
}
