//! CSV serialization of the filtered summary table.

use ::csv::WriterBuilder;
use tagsight_core::SummaryRow;

use crate::ExportError;

/// Write `File,Tag,Count` rows as UTF-8 CSV, header included.
///
/// Row order is the summary's own order, so parsing the output back yields
/// the same triples in the same sequence.
pub fn write_summary_csv(rows: &[SummaryRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(["File", "Tag", "Count"])?;
    for row in rows {
        let tag = row.tag.to_string();
        let count = row.count.to_string();
        writer.write_record([row.source_file.as_str(), tag.as_str(), count.as_str()])?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}
