use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::{LogEntry, TagValue};

/// Count of log entries sharing one `(source_file, tag)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub source_file: String,
    pub tag: TagValue,
    pub count: u64,
}

/// Group the log by exact `(source_file, tag)` identity and count members.
///
/// One row per distinct pair present in the log, ordered by
/// `(source_file, tag)`. Recomputed from scratch whenever the log changes.
pub fn summarize(log: &[LogEntry]) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<(&str, &TagValue), u64> = BTreeMap::new();
    for entry in log {
        *groups
            .entry((entry.source_file.as_str(), &entry.tag))
            .or_default() += 1;
    }
    groups
        .into_iter()
        .map(|((source_file, tag), count)| SummaryRow {
            source_file: source_file.to_string(),
            tag: tag.clone(),
            count,
        })
        .collect()
}

/// Distinct tag values observed in the full log, sorted.
///
/// These are the selectable filter options; UIs prepend the "All" sentinel.
pub fn distinct_tags(log: &[LogEntry]) -> Vec<TagValue> {
    let set: BTreeSet<&TagValue> = log.iter().map(|e| &e.tag).collect();
    set.into_iter().cloned().collect()
}

/// Distinct source file names observed in the full log, sorted.
pub fn distinct_files(log: &[LogEntry]) -> Vec<String> {
    let set: BTreeSet<&str> = log.iter().map(|e| e.source_file.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}
