//! Export surface: the current filtered summary as CSV, the current chart
//! as PNG, and a branded PDF report page.
//!
//! Every export is a pure function of its inputs. Identity and timestamp are
//! threaded in through [`ExportMeta`] rather than looked up ambiently, so
//! repeated invocation with unchanged inputs is reproducible (byte-identical
//! for CSV/PNG; the PDF embeds its generation timestamp).

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tagsight_core::SummaryRow;

pub mod chart;
pub mod csv;
pub mod pdf;

pub use chart::{ChartSpec, CHART_TITLE};

/// Default PNG artifact name.
pub const PNG_FILENAME: &str = "filtered_tag_chart.png";
/// Default CSV artifact name.
pub const CSV_FILENAME: &str = "tag_summary_by_file.csv";

/// Default PDF artifact name; carries the identity the report is branded with.
pub fn pdf_filename(user_id: &str) -> String {
    format!("filtered_tag_chart_{user_id}.pdf")
}

/// Error taxonomy for export actions.
///
/// Failures here are fatal for the one action that raised them; they never
/// affect ingestion, aggregation, or other exports.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("nothing to export: the filtered summary is empty")]
    EmptySummary,
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("chart rendering error: {0}")]
    Chart(String),
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Identity and timestamp threaded explicitly into the PDF export.
#[derive(Debug, Clone)]
pub struct ExportMeta {
    /// Session identity for report branding; `"anonymous"` when unset.
    pub user_id: String,
    /// Invocation time; always reflects the moment of the export action.
    pub generated_at: DateTime<Local>,
    /// Optional logo image on local disk.
    pub logo_path: Option<PathBuf>,
}

impl ExportMeta {
    pub fn new(user_id: impl Into<String>, generated_at: DateTime<Local>) -> Self {
        Self {
            user_id: user_id.into(),
            generated_at,
            logo_path: None,
        }
    }

    pub fn with_logo(mut self, logo_path: impl Into<PathBuf>) -> Self {
        self.logo_path = Some(logo_path.into());
        self
    }

    /// Header timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Serialize the filtered summary as CSV. A header-only file is valid
/// output when the filter matches nothing.
pub fn summary_csv(rows: &[SummaryRow]) -> Result<Vec<u8>, ExportError> {
    csv::write_summary_csv(rows)
}

/// Rasterize the current chart to PNG. Refuses an empty summary: no chart
/// is shown for it, so none is exportable.
pub fn chart_png(rows: &[SummaryRow], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let spec = ChartSpec::from_rows(rows).ok_or(ExportError::EmptySummary)?;
    chart::render_png(&spec, width, height)
}

/// Render the branded PDF report page for the current chart.
pub fn chart_pdf(
    rows: &[SummaryRow],
    meta: &ExportMeta,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, ExportError> {
    let spec = ChartSpec::from_rows(rows).ok_or(ExportError::EmptySummary)?;
    pdf::render_report(&spec, meta, width, height)
}
