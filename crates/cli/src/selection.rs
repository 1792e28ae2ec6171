use tagsight_core::{FilterSelection, TagValue};

/// Build the filter selection from CLI flags. Absent flags mean "All".
pub fn selection_from_args(tag: Option<&str>, file: Option<&str>) -> FilterSelection {
    FilterSelection {
        tag: tag.map(parse_tag_arg),
        source_file: file.map(str::to_string),
    }
}

/// Interpret a `--tag` argument.
///
/// Tags can be any JSON value, so the argument is parsed as JSON when it is
/// one (`3`, `true`, `{"k":1}`); anything else selects the string tag with
/// that exact text.
pub fn parse_tag_arg(arg: &str) -> TagValue {
    serde_json::from_str(arg)
        .map(TagValue::new)
        .unwrap_or_else(|_| TagValue::from(arg))
}
