//! JSONL tag ingestion.
//!
//! A dataset file is newline-separated JSON object text. Each line that
//! parses as JSON and carries a `tag` key becomes one [`LogEntry`]; every
//! other line is skipped without aborting the file. Skips are counted per
//! file in a [`FileReport`] so they can be shown as a diagnostic.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tagsight_core::LogEntry;

mod report;

pub use report::{FileReport, IngestBatch};

/// Extension required of uploaded dataset files.
pub const DATASET_EXTENSION: &str = "jsonl";

/// Whether a path names a dataset file this tool ingests.
pub fn is_dataset_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(DATASET_EXTENSION))
}

/// Parse one file's bytes into log entries.
///
/// Invalid UTF-8 never aborts the file: bytes are decoded lossily and the
/// affected lines fail JSON parsing like any other malformed line.
pub fn ingest_bytes(source_file: &str, bytes: &[u8]) -> (Vec<LogEntry>, FileReport) {
    let text = String::from_utf8_lossy(bytes);
    let mut report = FileReport::new(source_file);
    report.lossy_utf8 = matches!(text, Cow::Owned(_));

    let mut entries = Vec::new();
    for line in text.lines() {
        report.total_lines += 1;
        match serde_json::from_str::<Value>(line) {
            Ok(value) => match value.get("tag") {
                Some(tag) => {
                    entries.push(LogEntry::new(source_file, tag.clone()));
                    report.parsed += 1;
                }
                None => report.skipped_missing_tag += 1,
            },
            Err(_) => report.skipped_invalid_json += 1,
        }
    }

    tracing::debug!(
        source_file,
        parsed = report.parsed,
        skipped = report.skipped(),
        "ingested dataset file"
    );
    (entries, report)
}

/// Ingest a batch of dataset files into one flat log.
///
/// Log order is argument order, then line order within each file. An
/// unreadable file is recorded in its report and skipped; it never aborts
/// the batch.
pub fn ingest_files<P: AsRef<Path>>(paths: &[P]) -> IngestBatch {
    let mut batch = IngestBatch::default();
    for path in paths {
        let path = path.as_ref();
        let name = source_name(path);
        match fs::read(path) {
            Ok(bytes) => {
                let (entries, report) = ingest_bytes(&name, &bytes);
                batch.log.extend(entries);
                batch.reports.push(report);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable dataset file");
                batch.reports.push(FileReport::unreadable(name));
            }
        }
    }
    batch
}

/// Source label for a path: the file name, as the upload widget would show it.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tagsight_core::TagValue;

    #[test]
    fn every_tagged_line_becomes_an_entry() {
        let data = b"{\"tag\":\"x\"}\n{\"tag\":\"x\"}\n{\"tag\":\"y\"}\n";
        let (entries, report) = ingest_bytes("a.jsonl", data);
        assert_eq!(entries.len(), 3);
        assert_eq!(report.total_lines, 3);
        assert_eq!(report.parsed, 3);
        assert_eq!(report.skipped(), 0);
        assert_eq!(entries[0].tag, TagValue::from("x"));
        assert_eq!(entries[2].tag, TagValue::from("y"));
        assert!(entries.iter().all(|e| e.source_file == "a.jsonl"));
    }

    #[test]
    fn malformed_line_is_skipped_without_error() {
        let data = b"{\"tag\":\n{\"tag\":\"x\"}\n";
        let (entries, report) = ingest_bytes("a.jsonl", data);
        assert_eq!(entries.len(), 1);
        assert_eq!(report.skipped_invalid_json, 1);
        assert_eq!(report.skipped_missing_tag, 0);
    }

    #[test]
    fn line_without_tag_key_is_skipped() {
        let data = b"{\"label\":\"x\"}\n{\"tag\":\"x\"}\n42\n";
        let (entries, report) = ingest_bytes("a.jsonl", data);
        // Non-object JSON has no `tag` key either.
        assert_eq!(entries.len(), 1);
        assert_eq!(report.skipped_missing_tag, 2);
        assert_eq!(report.skipped_invalid_json, 0);
    }

    #[test]
    fn file_with_no_tags_yields_empty_log() {
        let data = b"{\"a\":1}\n{\"b\":2}\n";
        let (entries, report) = ingest_bytes("a.jsonl", data);
        assert!(entries.is_empty());
        assert_eq!(report.skipped_missing_tag, 2);
    }

    #[test]
    fn non_string_tags_are_kept_as_is() {
        let data = b"{\"tag\":7}\n{\"tag\":true}\n{\"tag\":{\"k\":1}}\n";
        let (entries, _) = ingest_bytes("a.jsonl", data);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].tag.to_string(), "7");
        assert_eq!(entries[1].tag.to_string(), "true");
        assert_eq!(entries[2].tag.to_string(), "{\"k\":1}");
    }

    #[test]
    fn invalid_utf8_is_absorbed_at_line_level() {
        let mut data = Vec::new();
        data.extend_from_slice(b"{\"tag\":\"ok\"}\n");
        data.extend_from_slice(b"{\"tag\":\"bad\xff\xfe");
        data.extend_from_slice(b"\"}\n");
        let (entries, report) = ingest_bytes("a.jsonl", &data);
        assert!(report.lossy_utf8);
        // The clean line survives regardless of what the bad bytes decode to.
        assert!(entries.iter().any(|e| e.tag == TagValue::from("ok")));
        assert_eq!(report.total_lines, 2);
    }

    #[test]
    fn empty_file_produces_no_lines() {
        let (entries, report) = ingest_bytes("a.jsonl", b"");
        assert!(entries.is_empty());
        assert_eq!(report.total_lines, 0);
        assert!(!report.lossy_utf8);
    }

    #[test]
    fn batch_preserves_file_then_line_order() {
        let mut a = tempfile::NamedTempFile::with_suffix(".jsonl").unwrap();
        writeln!(a, "{{\"tag\":\"x\"}}").unwrap();
        writeln!(a, "{{\"tag\":\"y\"}}").unwrap();
        let mut b = tempfile::NamedTempFile::with_suffix(".jsonl").unwrap();
        writeln!(b, "{{\"tag\":\"z\"}}").unwrap();

        let batch = ingest_files(&[a.path(), b.path()]);
        assert_eq!(batch.log.len(), 3);
        let tags: Vec<String> = batch.log.iter().map(|e| e.tag.to_string()).collect();
        assert_eq!(tags, vec!["x", "y", "z"]);
        assert_eq!(batch.reports.len(), 2);
    }

    #[test]
    fn unreadable_file_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.jsonl");
        let batch = ingest_files(&[missing]);
        assert!(batch.log.is_empty());
        assert_eq!(batch.reports.len(), 1);
        assert!(batch.reports[0].unreadable);
        assert!(batch.has_diagnostics());
    }

    #[test]
    fn dataset_extension_check_is_case_insensitive() {
        assert!(is_dataset_file(Path::new("a.jsonl")));
        assert!(is_dataset_file(Path::new("b.JSONL")));
        assert!(!is_dataset_file(Path::new("c.json")));
        assert!(!is_dataset_file(Path::new("jsonl")));
    }
}
