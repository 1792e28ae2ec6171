use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;
use tagsight_core::{apply, summarize, FilterSelection, SummaryRow, TagValue};
use tagsight_ingest::{ingest_files, IngestBatch};

use crate::output::OutputFormat;
use crate::selection::selection_from_args;

/// Run the `summary` command.
pub fn run_summary(
    files: &[PathBuf],
    tag: Option<&str>,
    file: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let paths = dataset_paths(files);
    let batch = ingest_files(&paths);
    let summary = summarize(&batch.log);
    let selection = selection_from_args(tag, file);
    let filtered = apply(&summary, &selection);

    match format {
        OutputFormat::Json => print_json(&batch, &summary, &filtered, &selection)?,
        OutputFormat::Text => print_text(&batch, &filtered, &selection),
    }
    Ok(())
}

/// Keep only `.jsonl` arguments, warning about the rest.
pub fn dataset_paths(files: &[PathBuf]) -> Vec<&Path> {
    let mut paths = Vec::new();
    for file in files {
        if tagsight_ingest::is_dataset_file(file) {
            paths.push(file.as_path());
        } else {
            eprintln!(
                "Warning: not a .jsonl dataset file, skipping: {}",
                file.display()
            );
        }
    }
    paths
}

fn print_text(batch: &IngestBatch, filtered: &[SummaryRow], selection: &FilterSelection) {
    if batch.log.is_empty() {
        println!("No tagged records found.");
        print_diagnostics(batch);
        return;
    }

    let tag_label = selection
        .tag
        .as_ref()
        .map_or_else(|| "All".to_string(), ToString::to_string);
    let file_label = selection.source_file.as_deref().unwrap_or("All");

    println!("Tag Counts by File (tag: {tag_label}, file: {file_label})");
    println!("{}", "─".repeat(50));

    // Full log, one row per tagged record, upload order
    let log_file_width = batch
        .log
        .iter()
        .map(|e| e.source_file.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    println!("Uploaded Tags by File:");
    for entry in &batch.log {
        println!("  {:<log_file_width$}  {}", entry.source_file, entry.tag);
    }
    println!();

    if filtered.is_empty() {
        println!("No rows match the current filters.");
        println!();
        print_diagnostics(batch);
        return;
    }

    // Summary table
    let file_width = filtered
        .iter()
        .map(|r| r.source_file.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let tag_width = filtered
        .iter()
        .map(|r| r.tag.to_string().chars().count())
        .max()
        .unwrap_or(3)
        .max(3);
    println!("{:<file_width$}  {:<tag_width$}  Count", "File", "Tag");
    for row in filtered {
        let tag = row.tag.to_string();
        println!(
            "{:<file_width$}  {tag:<tag_width$}  {}",
            row.source_file, row.count
        );
    }
    println!();

    // Grouped bars, one series line per file within each tag group
    let max = filtered.iter().map(|r| r.count).max().unwrap_or(1);
    let mut groups: BTreeMap<&TagValue, Vec<&SummaryRow>> = BTreeMap::new();
    for row in filtered {
        groups.entry(&row.tag).or_default().push(row);
    }
    for (tag, rows) in &groups {
        println!("{tag}");
        for row in rows {
            let bar = "█".repeat(bar_len(row.count, max, 30));
            println!("  {:<file_width$} {bar} ({})", row.source_file, row.count);
        }
    }
    println!();
    print_diagnostics(batch);
}

/// Scale a count into a bar of at most `budget` cells; nonzero counts always
/// get at least one cell.
fn bar_len(count: u64, max: u64, budget: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    ((count as usize * budget) / max as usize).max(1)
}

fn print_diagnostics(batch: &IngestBatch) {
    if !batch.has_diagnostics() {
        return;
    }
    println!("Skipped lines:");
    for report in &batch.reports {
        if report.unreadable {
            println!("  {}: unreadable, skipped", report.source_file);
            continue;
        }
        if report.skipped() == 0 && !report.lossy_utf8 {
            continue;
        }
        let mut note = format!(
            "  {}: {} of {} lines skipped ({} bad JSON, {} missing tag)",
            report.source_file,
            report.skipped(),
            report.total_lines,
            report.skipped_invalid_json,
            report.skipped_missing_tag
        );
        if report.lossy_utf8 {
            note.push_str(", invalid UTF-8 replaced");
        }
        println!("{note}");
    }
}

fn print_json(
    batch: &IngestBatch,
    summary: &[SummaryRow],
    filtered: &[SummaryRow],
    selection: &FilterSelection,
) -> Result<()> {
    let json = serde_json::json!({
        "filter": {
            "tag": selection
                .tag
                .as_ref()
                .map_or(Value::String("All".to_string()), |t| t.as_value().clone()),
            "file": selection
                .source_file
                .clone()
                .map_or(Value::String("All".to_string()), Value::String),
        },
        "log": &batch.log,
        "summary": summary,
        "filtered": filtered,
        "reports": &batch.reports,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
