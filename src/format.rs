//! Canonical display formatting for attribute payloads.

use crate::types::AttributeValue;

/// Render an attribute payload as its canonical display string.
///
/// Total and deterministic: every payload shape maps to a string, and any
/// shape the engine does not understand degrades to the literal
/// `"unknown value"` placeholder instead of aborting the surrounding dump or
/// search.
pub fn format_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Absent => String::new(),
        AttributeValue::Number(number) => number.to_string(),
        AttributeValue::Text(text) => text.clone(),
        AttributeValue::List(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        AttributeValue::Point { x, y } => format!("({x}, {y})"),
        AttributeValue::Size { w, h } => format!("{w}\u{00d7}{h}"),
        AttributeValue::Range { start, len } => format!("{start}..{}", start + len),
        AttributeValue::Rect { x, y, w, h } => format!("({x}, {y}, {w}, {h})"),
        AttributeValue::Unknown => "unknown value".to_string(),
    }
}
