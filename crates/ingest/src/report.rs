use serde::Serialize;
use tagsight_core::LogEntry;

/// Per-file ingestion outcome.
///
/// The line-level skip rule never aborts a file, but decode failures and
/// schema-absence failures are counted separately so they can be surfaced
/// as a diagnostic instead of disappearing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileReport {
    pub source_file: String,
    pub total_lines: u64,
    /// Lines that produced a log entry.
    pub parsed: u64,
    /// Lines that were not valid JSON.
    pub skipped_invalid_json: u64,
    /// Lines that were valid JSON but carried no `tag` key.
    pub skipped_missing_tag: u64,
    /// The file's bytes were not valid UTF-8 and were decoded lossily.
    pub lossy_utf8: bool,
    /// The file could not be read at all; no lines were processed.
    pub unreadable: bool,
}

impl FileReport {
    pub fn new(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            ..Self::default()
        }
    }

    pub fn unreadable(source_file: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            unreadable: true,
            ..Self::default()
        }
    }

    /// Lines dropped by the skip rule.
    pub fn skipped(&self) -> u64 {
        self.skipped_invalid_json + self.skipped_missing_tag
    }
}

/// Result of ingesting one batch of dataset files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestBatch {
    /// Flat log, file order then line order.
    pub log: Vec<LogEntry>,
    /// One report per requested file, in request order.
    pub reports: Vec<FileReport>,
}

impl IngestBatch {
    pub fn skipped_total(&self) -> u64 {
        self.reports.iter().map(FileReport::skipped).sum()
    }

    pub fn has_diagnostics(&self) -> bool {
        self.skipped_total() > 0 || self.reports.iter().any(|r| r.unreadable || r.lossy_utf8)
    }
}
