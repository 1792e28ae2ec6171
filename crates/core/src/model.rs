use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The value of a record's `tag` key, stored exactly as it appeared.
///
/// Tags may be any JSON type, not only strings. Grouping identity is exact
/// JSON value equality; ordering and hashing go through the canonical compact
/// serialization so mixed-type tags can share one table. Strings display
/// bare, every other type displays as its compact JSON text.
#[derive(Debug, Clone)]
pub struct TagValue {
    value: Value,
    canonical: String,
}

impl TagValue {
    pub fn new(value: Value) -> Self {
        // serde_json::Value always serializes: object keys are strings.
        let canonical = serde_json::to_string(&value).unwrap();
        Self { value, canonical }
    }

    /// The tag as parsed from the record, uncoerced.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Compact JSON text of the tag. Stable across equal values because
    /// serde_json serializes object keys in sorted order.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        Self::new(Value::String(s.to_string()))
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

impl PartialEq for TagValue {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for TagValue {}

impl PartialOrd for TagValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TagValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl Hash for TagValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl Serialize for TagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TagValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::new(Value::deserialize(deserializer)?))
    }
}

/// One valid tagged record from an ingested JSONL file.
///
/// Entries are immutable and live only in the in-memory log for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Name of the file the record came from.
    pub source_file: String,
    /// Value of the record's `tag` key, as-is.
    pub tag: TagValue,
}

impl LogEntry {
    pub fn new(source_file: impl Into<String>, tag: Value) -> Self {
        Self {
            source_file: source_file.into(),
            tag: TagValue::new(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_tags_display_bare() {
        assert_eq!(TagValue::new(json!("anxiety")).to_string(), "anxiety");
    }

    #[test]
    fn test_non_string_tags_display_as_compact_json() {
        assert_eq!(TagValue::new(json!(7)).to_string(), "7");
        assert_eq!(TagValue::new(json!(true)).to_string(), "true");
        assert_eq!(TagValue::new(json!({"a": 1})).to_string(), "{\"a\":1}");
        assert_eq!(TagValue::new(json!(null)).to_string(), "null");
    }

    #[test]
    fn test_equality_is_value_identity() {
        assert_eq!(TagValue::new(json!("x")), TagValue::new(json!("x")));
        // The string "1" and the number 1 are distinct tags.
        assert_ne!(TagValue::new(json!("1")), TagValue::new(json!(1)));
        assert_ne!(TagValue::new(json!(1)), TagValue::new(json!(true)));
    }

    #[test]
    fn test_object_tags_group_regardless_of_key_order() {
        let a: Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(TagValue::new(a), TagValue::new(b));
    }

    #[test]
    fn test_ordering_is_total_over_mixed_types() {
        let mut tags = vec![
            TagValue::new(json!("b")),
            TagValue::new(json!(2)),
            TagValue::new(json!("a")),
            TagValue::new(json!(true)),
        ];
        tags.sort();
        // Lexical over canonical text: deterministic even for mixed types.
        let rendered: Vec<String> = tags.iter().map(|t| t.canonical().to_string()).collect();
        let mut sorted = rendered.clone();
        sorted.sort();
        assert_eq!(rendered, sorted);
    }

    #[test]
    fn test_serde_roundtrip_preserves_value() {
        let tag = TagValue::new(json!({"kind": "mood", "level": 3}));
        let text = serde_json::to_string(&tag).unwrap();
        let back: TagValue = serde_json::from_str(&text).unwrap();
        assert_eq!(tag, back);
    }
}
