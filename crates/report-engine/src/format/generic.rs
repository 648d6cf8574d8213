//! Fallback formatter for sections without bespoke rules: iterates fields in
//! declaration order, title-cases keys, renders arrays as bullet lists and
//! recurses one level into nested objects.

use serde_json::Value;
use site_types::section::is_empty_value;

/// Convert a camelCase or snake_case key to Title Case with spaces.
pub fn title_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut start_of_word = true;
    for ch in key.chars() {
        if ch == '_' || ch == '-' {
            start_of_word = true;
            continue;
        }
        if ch.is_uppercase() && !start_of_word && !out.is_empty() {
            out.push(' ');
        }
        if start_of_word {
            out.extend(ch.to_uppercase());
            start_of_word = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Format an arbitrary section payload as a flat text block. Returns `None`
/// when nothing in the payload is populated.
pub fn format_generic(value: &Value) -> Option<String> {
    let mut lines = Vec::new();
    append_value(&mut lines, value, 0);
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn append_value(lines: &mut Vec<String>, value: &Value, depth: usize) {
    match value {
        Value::Object(map) => {
            for (key, field) in map {
                if is_empty_value(field) {
                    continue;
                }
                let label = title_case_key(key);
                let indent = "  ".repeat(depth);
                match field {
                    Value::Array(items) => {
                        lines.push(format!("{indent}{label}:"));
                        for item in items.iter().filter(|v| !is_empty_value(v)) {
                            lines.push(format!("{indent}  \u{2022} {}", scalar_text(item)));
                        }
                    }
                    // One level of nesting only; deeper objects flatten.
                    Value::Object(_) if depth == 0 => {
                        lines.push(format!("{indent}{label}:"));
                        append_value(lines, field, depth + 1);
                    }
                    other => {
                        lines.push(format!("{indent}{label}: {}", scalar_text(other)));
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter().filter(|v| !is_empty_value(v)) {
                lines.push(format!("\u{2022} {}", scalar_text(item)));
            }
        }
        other if !is_empty_value(other) => lines.push(scalar_text(other)),
        _ => {}
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter(|v| !is_empty_value(v))
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !is_empty_value(v))
            .map(|(k, v)| format!("{}: {}", title_case_key(k), scalar_text(v)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => String::new(),
    }
}
