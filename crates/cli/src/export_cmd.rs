use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tagsight_core::{apply, summarize};
use tagsight_export::{
    chart_pdf, chart_png, pdf_filename, summary_csv, ExportMeta, CSV_FILENAME, PNG_FILENAME,
};
use tagsight_ingest::ingest_files;

use crate::config_cmd;
use crate::selection::selection_from_args;
use crate::summary_cmd::dataset_paths;

/// Artifact kind produced by `export`.
#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Rasterized chart, image/png
    Png,
    /// Branded report page, application/pdf
    Pdf,
    /// Filtered summary table, text/csv
    Csv,
}

/// Run the `export` command.
///
/// Each invocation derives the artifact from the current filtered summary
/// and writes exactly one file; it never mutates any state.
pub fn run_export(
    format: ExportFormat,
    files: &[PathBuf],
    tag: Option<&str>,
    file: Option<&str>,
    output: Option<PathBuf>,
    user: Option<String>,
) -> Result<()> {
    let paths = dataset_paths(files);
    let batch = ingest_files(&paths);
    let summary = summarize(&batch.log);
    let filtered = apply(&summary, &selection_from_args(tag, file));

    let config = config_cmd::load_config();
    let user_id = user.unwrap_or_else(|| config.identity.user_id.clone());
    let meta = ExportMeta::new(user_id.clone(), Local::now())
        .with_logo(config.branding.logo_path.clone());
    let (width, height) = (config.chart.width, config.chart.height);

    let (bytes, default_name) = match format {
        ExportFormat::Png => (chart_png(&filtered, width, height)?, PNG_FILENAME.to_string()),
        ExportFormat::Pdf => (
            chart_pdf(&filtered, &meta, width, height)?,
            pdf_filename(&user_id),
        ),
        ExportFormat::Csv => (summary_csv(&filtered)?, CSV_FILENAME.to_string()),
    };

    let path = output.unwrap_or_else(|| PathBuf::from(default_name));
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
