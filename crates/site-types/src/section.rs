//! Normalized section content.
//!
//! Legacy form data stores the same section field as a string, an array or a
//! nested object depending on when it was saved. `SectionContent` is the
//! tagged union every formatter works against; normalization happens once at
//! this boundary instead of ad-hoc type inspection inside formatting code.

use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Text(String),
    List(Vec<String>),
    Record(Map<String, Value>),
}

impl SectionContent {
    /// Normalize a raw stored value. Returns `None` for null, empty strings,
    /// empty arrays and empty objects — content that must be skipped rather
    /// than rendered as an empty block.
    pub fn from_value(value: &Value) -> Option<SectionContent> {
        match value {
            Value::Null => None,
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(SectionContent::Text(trimmed.to_string()))
                }
            }
            Value::Bool(b) => Some(SectionContent::Text(
                if *b { "Yes" } else { "No" }.to_string(),
            )),
            Value::Number(n) => Some(SectionContent::Text(n.to_string())),
            Value::Array(items) => {
                let entries: Vec<String> = items
                    .iter()
                    .filter_map(|item| match SectionContent::from_value(item)? {
                        SectionContent::Text(t) => Some(t),
                        SectionContent::List(l) => Some(l.join(", ")),
                        SectionContent::Record(_) => None,
                    })
                    .collect();
                if entries.is_empty() {
                    None
                } else {
                    Some(SectionContent::List(entries))
                }
            }
            Value::Object(map) => {
                if map.values().all(is_empty_value) {
                    None
                } else {
                    Some(SectionContent::Record(map.clone()))
                }
            }
        }
    }

    /// Flatten to a single display string (lists become one entry per line).
    pub fn as_text(&self) -> String {
        match self {
            SectionContent::Text(t) => t.clone(),
            SectionContent::List(items) => items.join("\n"),
            SectionContent::Record(map) => map
                .iter()
                .filter(|(_, v)| !is_empty_value(v))
                .map(|(k, v)| format!("{k}: {}", value_to_display(v)))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// True for values the renderer treats as absent.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.iter().all(is_empty_value),
        Value::Object(map) => map.values().all(is_empty_value),
        _ => false,
    }
}

fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter(|v| !is_empty_value(v))
            .map(value_to_display)
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_blank_string_normalizes_to_none() {
        assert_eq!(SectionContent::from_value(&json!("   ")), None);
        assert_eq!(SectionContent::from_value(&Value::Null), None);
    }

    #[test]
    fn test_string_is_trimmed_text() {
        assert_eq!(
            SectionContent::from_value(&json!("  hard hats required ")),
            Some(SectionContent::Text("hard hats required".into()))
        );
    }

    #[test]
    fn test_array_drops_empty_entries() {
        let content = SectionContent::from_value(&json!(["first", "", null, "second"]));
        assert_eq!(
            content,
            Some(SectionContent::List(vec!["first".into(), "second".into()]))
        );
    }

    #[test]
    fn test_object_of_empty_values_is_none() {
        assert_eq!(
            SectionContent::from_value(&json!({"a": "", "b": null, "c": []})),
            None
        );
    }

    #[test]
    fn test_legacy_bool_renders_as_yes_no() {
        assert_eq!(
            SectionContent::from_value(&json!(true)),
            Some(SectionContent::Text("Yes".into()))
        );
    }
}
