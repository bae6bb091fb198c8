use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Heterogeneous attribute payload read from an accessibility element.
///
/// The platform exposes an open set of value shapes; everything the engine
/// understands is enumerated here, and anything else arrives as [`Unknown`].
/// A read that produced nothing (whether the attribute is missing or the
/// platform declined to supply it) is [`Absent`].
///
/// [`Unknown`]: AttributeValue::Unknown
/// [`Absent`]: AttributeValue::Absent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AttributeValue {
    Number(Number),
    Text(String),
    List(Vec<AttributeValue>),
    Point { x: f64, y: f64 },
    Size { w: f64, h: f64 },
    Range { start: i64, len: i64 },
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Unknown,
    Absent,
}

impl AttributeValue {
    /// Convenience constructor for text payloads.
    pub fn text(value: impl Into<String>) -> Self {
        AttributeValue::Text(value.into())
    }

    /// Returns the inner string when the payload is non-empty text.
    pub fn as_non_empty_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl Default for AttributeValue {
    fn default() -> Self {
        AttributeValue::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_tagged_payloads() {
        let value: AttributeValue =
            serde_json::from_value(json!({ "type": "text", "value": "Submit" })).expect("text");
        assert_eq!(value, AttributeValue::text("Submit"));

        let value: AttributeValue =
            serde_json::from_value(json!({ "type": "point", "value": { "x": 1.0, "y": 2.0 } }))
                .expect("point");
        assert_eq!(value, AttributeValue::Point { x: 1.0, y: 2.0 });

        let value: AttributeValue =
            serde_json::from_value(json!({ "type": "unknown" })).expect("unknown");
        assert_eq!(value, AttributeValue::Unknown);
    }

    #[test]
    fn non_empty_text_filter() {
        assert_eq!(
            AttributeValue::text("Save").as_non_empty_text(),
            Some("Save")
        );
        assert_eq!(AttributeValue::text("").as_non_empty_text(), None);
        assert_eq!(AttributeValue::Absent.as_non_empty_text(), None);
    }
}
