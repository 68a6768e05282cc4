//! Record data model for report rendering.
//!
//! This module defines:
//! - `Payload` - the tagged input shape a caller hands to a renderer
//! - `Record` / `RecordList` - ordered field mappings as returned by
//!   the retrieval layer
//! - Field lookup with the fixed `N/A` fallback marker
//! - Key humanization (snake_case field name -> display label)
//!
//! Everything here is read-only over externally owned data; nothing is
//! validated, sorted, or transformed beyond display conversion.

use serde_json::{Map, Value};

/// Marker rendered for a missing, null, or non-projectable field.
pub const NOT_AVAILABLE: &str = "N/A";

/// One entity from the retrieval layer: an insertion-ordered mapping
/// from snake_case field names to values.
pub type Record = Map<String, Value>;

/// A homogeneous sequence of records. Items are projected defensively:
/// a malformed item degrades to `N/A` fields instead of failing the
/// whole render.
pub type RecordList = Vec<Value>;

/// Input shape for a renderer, fixed by the caller.
///
/// The retrieval layer produces JSON; `Payload::from(Value)` normalizes
/// it. Anything that is not an object, array, or string counts as
/// missing data, which renderers turn into their empty-state message.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No data: null, a retrieval miss, or an unusable scalar.
    Missing,
    /// A single record.
    Record(Record),
    /// A list of records.
    List(RecordList),
    /// A base64-encoded blob, passed through undecoded.
    Text(String),
}

impl Payload {
    /// True when there is nothing to render: missing, `{}`, `[]`, or `""`.
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Missing => true,
            Payload::Record(record) => record.is_empty(),
            Payload::List(items) => items.is_empty(),
            Payload::Text(text) => text.is_empty(),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(record) => Payload::Record(record),
            Value::Array(items) => Payload::List(items),
            Value::String(text) => Payload::Text(text),
            _ => Payload::Missing,
        }
    }
}

impl From<Option<Value>> for Payload {
    fn from(value: Option<Value>) -> Self {
        value.map(Payload::from).unwrap_or(Payload::Missing)
    }
}

/// Convert a snake_case field name to its display label: underscores
/// become spaces and each word is title-cased.
///
/// `"jumlah_mahasiswa"` -> `"Jumlah Mahasiswa"`. Applying the rule to
/// an already-humanized label is a no-op.
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ").split(' ').map(title_case_word).collect::<Vec<_>>().join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Display form of a single value. Strings render verbatim, numbers and
/// booleans via their natural text form; null is absence and renders
/// the `N/A` marker. Structured values (beyond the nesting level the
/// record renderer handles itself) render as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Look up a field on a record, falling back to the `N/A` marker when
/// the field is missing or null.
pub fn field_or_na(record: &Record, field: &str) -> String {
    match record.get(field) {
        Some(value) => display_value(value),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Defensive projection of a field from a list item. Non-object items
/// have no fields, so every lookup on them degrades to `N/A`.
pub fn item_field(item: &Value, field: &str) -> String {
    match item.as_object() {
        Some(record) => field_or_na(record, field),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;
