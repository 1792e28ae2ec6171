//! Grouped bar chart rasterization.
//!
//! [`ChartSpec`] is the pure layout form of the filtered summary (tag groups
//! on the category axis, one colored series per source file); `render_png`
//! draws it with plotters into an in-memory PNG. Layout is kept separate so
//! it can be tested without a raster backend.

use plotters::prelude::*;
use tagsight_core::{SummaryRow, TagValue};

use crate::ExportError;

pub const CHART_TITLE: &str = "Filtered Tag Counts by File";

/// Series colors, matched to the TUI file palette so a file keeps its color
/// across surfaces.
const SERIES_PALETTE: [RGBColor; 8] = [
    RGBColor(100, 180, 240), // blue
    RGBColor(80, 200, 120),  // green
    RGBColor(220, 180, 60),  // yellow
    RGBColor(180, 140, 220), // purple
    RGBColor(220, 130, 80),  // orange
    RGBColor(80, 200, 200),  // teal
    RGBColor(220, 100, 160), // pink
    RGBColor(160, 200, 80),  // lime
];

pub fn series_color(index: usize) -> RGBColor {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Grid form of the filtered summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Category axis, sorted.
    pub tags: Vec<TagValue>,
    /// One series per source file, sorted.
    pub files: Vec<String>,
    /// `counts[file_index][tag_index]`; 0 where the pair is absent.
    pub counts: Vec<Vec<u64>>,
}

impl ChartSpec {
    /// Build the grid from filtered summary rows. `None` when there is
    /// nothing to chart — an empty summary never yields a chart artifact.
    pub fn from_rows(rows: &[SummaryRow]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let mut tags: Vec<TagValue> = rows.iter().map(|r| r.tag.clone()).collect();
        tags.sort();
        tags.dedup();
        let mut files: Vec<String> = rows.iter().map(|r| r.source_file.clone()).collect();
        files.sort();
        files.dedup();

        let mut counts = vec![vec![0u64; tags.len()]; files.len()];
        for row in rows {
            // Indices exist: tags/files were collected from these rows.
            let ti = tags.iter().position(|t| *t == row.tag).unwrap();
            let fi = files.iter().position(|f| *f == row.source_file).unwrap();
            counts[fi][ti] = row.count;
        }

        Some(Self {
            tags,
            files,
            counts,
        })
    }

    pub fn max_count(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|series| series.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Axis label for a tag group, truncated for readability.
    pub fn tag_label(&self, index: usize) -> String {
        let Some(tag) = self.tags.get(index) else {
            return String::new();
        };
        let text = tag.to_string();
        if text.chars().count() > 18 {
            let head: String = text.chars().take(17).collect();
            format!("{head}…")
        } else {
            text
        }
    }
}

/// Rasterize the chart to an in-memory PNG.
///
/// Fails visibly when the raster backend is unusable (e.g. no fonts); the
/// error is scoped to this one export action.
pub fn render_png(spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    draw(spec, &mut buf, width, height)?;

    let img = image::RgbImage::from_raw(width, height, buf)
        .ok_or_else(|| ExportError::Chart("raster buffer size mismatch".to_string()))?;
    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageOutputFormat::Png)?;
    Ok(png)
}

fn draw(spec: &ChartSpec, buf: &mut [u8], width: u32, height: u32) -> Result<(), ExportError> {
    let root = BitMapBackend::with_buffer(buf, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let groups = spec.tags.len();
    let y_max = (spec.max_count() as f64 * 1.15).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(48)
        .build_cartesian_2d(0f64..groups as f64, 0f64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups + 1)
        .x_label_formatter(&|x| {
            // Ticks land on integers; label each group at its left edge.
            let rounded = x.round();
            if (x - rounded).abs() < 1e-6 && rounded >= 0.0 {
                spec.tag_label(rounded as usize)
            } else {
                String::new()
            }
        })
        .x_desc("Tag")
        .y_desc("Count")
        .draw()
        .map_err(chart_err)?;

    // Bars for group i span [i + 0.1, i + 0.9], split evenly across series.
    let bar_width = 0.8 / spec.files.len() as f64;
    for (fi, file) in spec.files.iter().enumerate() {
        let color = series_color(fi);

        let bars = spec.tags.iter().enumerate().filter_map(|(ti, _)| {
            let count = spec.counts[fi][ti];
            (count > 0).then(|| {
                let x0 = ti as f64 + 0.1 + fi as f64 * bar_width;
                Rectangle::new(
                    [(x0, 0.0), (x0 + bar_width * 0.9, count as f64)],
                    color.filled(),
                )
            })
        });
        chart
            .draw_series(bars)
            .map_err(chart_err)?
            .label(file.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 4), (x + 10, y + 4)], color.filled())
            });

        // Count labels above each bar.
        let labels = spec.tags.iter().enumerate().filter_map(|(ti, _)| {
            let count = spec.counts[fi][ti];
            (count > 0).then(|| {
                let x = ti as f64 + 0.1 + (fi as f64 + 0.2) * bar_width;
                Text::new(
                    count.to_string(),
                    (x, count as f64 + y_max * 0.02),
                    ("sans-serif", 14),
                )
            })
        });
        chart.draw_series(labels).map_err(chart_err)?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4))
        .background_style(WHITE.mix(0.9))
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn chart_err<E: std::fmt::Display>(err: E) -> ExportError {
    ExportError::Chart(err.to_string())
}
