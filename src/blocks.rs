//! Generic text-block rendering primitives - pure formatting concerns.
//!
//! Every report in the catalog is built from the block shapes here:
//! - `record_block` - titled key/value dump of one record
//! - `labeled_block` - titled dump with hand-authored, aligned labels
//! - `list_block` - numbered field projection over a record list
//! - `record_sections_block` - numbered full key dumps, one per item
//! - `blob_block` - length/preview line for an undecoded base64 payload
//!
//! All functions build and return a `String`; nothing here touches
//! stdout or any other sink, and no input shape can make them fail.

use crate::record::{self, Record};
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

/// Fixed line used by list blocks when the list itself is empty.
pub const NO_DATA: &str = "Tidak ada data ditemukan.";

/// Extra dashes in the closing rule beyond the title width; mirrors the
/// `--- ` / ` ---` decoration around the banner title.
const RULE_PAD: usize = 8;

/// Number of preview characters shown for a blob payload.
const BLOB_PREVIEW_CHARS: usize = 100;

/// Indent for sub-fields of a nested record.
const NESTED_INDENT: &str = "  ";

/// Indent for field lines inside a numbered `Data:` section.
const SECTION_INDENT: &str = "   ";

fn banner(title: &str) -> String {
    format!("--- {} ---", title)
}

fn closing_rule(title: &str) -> String {
    "-".repeat(UnicodeWidthStr::width(title) + RULE_PAD)
}

/// Render a single record as a titled key/value block.
///
/// Fields appear in the record's own iteration order with humanized
/// labels. A value that is itself a record renders as a sub-heading
/// with indented key/value lines (one nesting level only; anything
/// deeper is stringified as-is). A missing or empty record yields the
/// caller's empty-state line and nothing else.
pub fn record_block(title: &str, empty: &str, data: Option<&Record>) -> String {
    let Some(record) = data.filter(|record| !record.is_empty()) else {
        return empty.to_string();
    };

    let mut lines = vec![banner(title)];
    for (key, value) in record {
        match value {
            Value::Object(nested) => {
                lines.push(format!("{}:", record::humanize_key(key)));
                for (sub_key, sub_value) in nested {
                    lines.push(format!(
                        "{}{}: {}",
                        NESTED_INDENT,
                        record::humanize_key(sub_key),
                        record::display_value(sub_value)
                    ));
                }
            }
            _ => lines.push(format!("{}: {}", record::humanize_key(key), record::display_value(value))),
        }
    }
    lines.push(closing_rule(title));
    lines.join("\n")
}

/// Render a single record as a titled block with hand-authored labels.
///
/// Used by the profile reports whose field sets are small and fixed and
/// whose labels carry domain abbreviations (NIDN, NIM, PT) that generic
/// humanization would mangle. Labels are padded to the widest label so
/// the colons line up; lookups degrade to `N/A` per field.
pub fn labeled_block(title: &str, empty: &str, labels: &[(&str, &str)], data: Option<&Record>) -> String {
    let Some(record) = data.filter(|record| !record.is_empty()) else {
        return empty.to_string();
    };

    let width = labels.iter().map(|(label, _)| UnicodeWidthStr::width(*label)).max().unwrap_or(0);

    let mut lines = vec![banner(title)];
    for (label, field) in labels {
        lines.push(format!("{:<width$} : {}", label, record::field_or_na(record, field)));
    }
    lines.push(closing_rule(title));
    lines.join("\n")
}

/// Render a record list as a titled, numbered projection block.
///
/// Each item becomes one line: a 1-based positional index followed by
/// the declared fields, comma-joined, in declared order. Missing fields
/// and non-object items render the `N/A` marker. An empty list renders
/// the fixed no-data line under the banner, with no closing rule.
pub fn list_block(title: &str, fields: &[&str], items: &[Value]) -> String {
    let mut lines = vec![banner(title)];
    if items.is_empty() {
        lines.push(NO_DATA.to_string());
        return lines.join("\n");
    }

    for (index, item) in items.iter().enumerate() {
        let details: Vec<String> = fields
            .iter()
            .map(|field| format!("{}: {}", record::humanize_key(field), record::item_field(item, field)))
            .collect();
        lines.push(format!("{}. {}", index + 1, details.join(", ")));
    }
    lines.push(closing_rule(title));
    lines.join("\n")
}

/// Render a record list as numbered sections, each dumping every field
/// of its item.
///
/// This is the list half of the one call-time-polymorphic report: items
/// are not projected through a declared field list but dumped whole,
/// one `N. Data:` heading per item with indented key/value lines.
/// Non-object items render as a single indented stringified line.
pub fn record_sections_block(title: &str, items: &[Value]) -> String {
    let mut lines = vec![banner(title)];
    if items.is_empty() {
        lines.push(NO_DATA.to_string());
    } else {
        for (index, item) in items.iter().enumerate() {
            lines.push(format!("{}. Data:", index + 1));
            match item.as_object() {
                Some(record) => {
                    for (key, value) in record {
                        lines.push(format!(
                            "{}{}: {}",
                            SECTION_INDENT,
                            record::humanize_key(key),
                            record::display_value(value)
                        ));
                    }
                }
                None => lines.push(format!("{}{}", SECTION_INDENT, record::display_value(item))),
            }
        }
    }
    lines.push(closing_rule(title));
    lines.join("\n")
}

/// Render the receipt line for an undecoded base64 payload.
///
/// Reports the character length and the first 100 characters of the
/// encoded text; shorter payloads show everything, and the ellipsis
/// marker follows either way. The payload is never decoded or
/// validated.
pub fn blob_block(label: &str, empty: &str, data: Option<&str>) -> String {
    let Some(text) = data.filter(|text| !text.is_empty()) else {
        return empty.to_string();
    };

    let length = text.chars().count();
    let preview: String = text.chars().take(BLOB_PREVIEW_CHARS).collect();
    format!("Data {} (base64) diterima. Panjang: {} karakter. Cuplikan: {}...", label, length, preview)
}

#[cfg(test)]
#[path = "blocks_test.rs"]
mod blocks_test;
