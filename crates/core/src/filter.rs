use crate::model::TagValue;
use crate::summary::SummaryRow;

/// Optional single-value constraints narrowing the summary to one tag and/or
/// one source file. `None` means "All" (no constraint).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub tag: Option<TagValue>,
    pub source_file: Option<String>,
}

impl FilterSelection {
    pub fn is_unfiltered(&self) -> bool {
        self.tag.is_none() && self.source_file.is_none()
    }
}

/// Project the summary rows through the selection.
///
/// Pure: row order is preserved and the result is always a subset of the
/// input. A selection value absent from the data yields an empty result.
pub fn apply(rows: &[SummaryRow], selection: &FilterSelection) -> Vec<SummaryRow> {
    rows.iter()
        .filter(|row| {
            selection.tag.as_ref().is_none_or(|t| &row.tag == t)
                && selection
                    .source_file
                    .as_ref()
                    .is_none_or(|f| &row.source_file == f)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogEntry;
    use crate::summary::summarize;
    use serde_json::json;

    fn sample_rows() -> Vec<SummaryRow> {
        summarize(&[
            LogEntry::new("a.jsonl", json!("x")),
            LogEntry::new("a.jsonl", json!("x")),
            LogEntry::new("a.jsonl", json!("y")),
            LogEntry::new("b.jsonl", json!("x")),
        ])
    }

    #[test]
    fn test_all_all_is_identity() {
        let rows = sample_rows();
        assert_eq!(apply(&rows, &FilterSelection::default()), rows);
    }

    #[test]
    fn test_tag_constraint_keeps_only_matching_rows() {
        let rows = sample_rows();
        let filtered = apply(
            &rows,
            &FilterSelection {
                tag: Some(TagValue::from("x")),
                source_file: None,
            },
        );
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.tag == TagValue::from("x")));
        // One row per file, each count from its own file.
        assert_eq!(filtered[0].source_file, "a.jsonl");
        assert_eq!(filtered[0].count, 2);
        assert_eq!(filtered[1].source_file, "b.jsonl");
        assert_eq!(filtered[1].count, 1);
    }

    #[test]
    fn test_both_constraints_intersect() {
        let rows = sample_rows();
        let filtered = apply(
            &rows,
            &FilterSelection {
                tag: Some(TagValue::from("x")),
                source_file: Some("a.jsonl".to_string()),
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].count, 2);
    }

    #[test]
    fn test_absent_value_yields_empty_not_error() {
        // A stale selection after re-upload must fall back to an empty set.
        let rows = sample_rows();
        let filtered = apply(
            &rows,
            &FilterSelection {
                tag: Some(TagValue::from("gone")),
                source_file: None,
            },
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_row_order_preserved() {
        let rows = sample_rows();
        let filtered = apply(
            &rows,
            &FilterSelection {
                tag: None,
                source_file: Some("a.jsonl".to_string()),
            },
        );
        let positions: Vec<usize> = filtered
            .iter()
            .map(|f| rows.iter().position(|r| r == f).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
