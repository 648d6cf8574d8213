//! Section formatting: one strategy per section type, dispatched through a
//! single registry keyed by section key. Every formatter returns `None` for
//! unpopulated content so callers can skip the section entirely — an empty
//! section must never surface as a header-only table.

pub mod generic;
pub mod named;
pub mod options;
pub mod records;

use serde_json::Value;

/// Output of a section formatter: either one flat text blob (single-column
/// tables) or ordered label/value rows (two-column tables).
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedBlock {
    Text(String),
    Rows(Vec<(String, String)>),
}

/// Legacy rows sometimes persist a section as a JSON string. Parse it back;
/// on corrupt content, log and fall back to an empty structure so the rest
/// of the document still renders.
pub fn normalize_stored(value: &Value) -> Value {
    if let Value::String(s) = value {
        let trimmed = s.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return match serde_json::from_str(s) {
                Ok(parsed) => parsed,
                Err(err) => {
                    tracing::warn!(%err, "discarding malformed section content");
                    Value::Null
                }
            };
        }
    }
    value.clone()
}

/// Format one section by key. Dispatch order: checkbox sets, fixed-order
/// named sections, record arrays, then the generic fallback.
pub fn format_section(key: &str, raw: &Value) -> Option<FormattedBlock> {
    let value = normalize_stored(raw);

    if options::section_for(key).is_some() {
        return options::format_options(key, &value).map(FormattedBlock::Text);
    }

    if let Some(fields) = named_fields(key) {
        return named::format_named(fields, &value).map(FormattedBlock::Rows);
    }

    if let Some(fields) = records::fields_for(key) {
        return records::format_records(fields, &value).map(FormattedBlock::Text);
    }

    generic::format_generic(&value).map(FormattedBlock::Text)
}

fn named_fields(key: &str) -> Option<named::FieldList> {
    match key {
        "front_cover" => Some(named::FRONT_COVER),
        "site_information" => Some(named::SITE_INFORMATION),
        "project_description" => Some(named::PROJECT_DESCRIPTION),
        "hours_team" => Some(named::HOURS_TEAM),
        "first_aid" => Some(named::FIRST_AID),
        "rescue_plan" => Some(named::RESCUE_PLAN),
        "emergency_procedures" => Some(named::EMERGENCY_PROCEDURES),
        "induction_training" => Some(named::INDUCTION_TRAINING),
        "monitoring_review" => Some(named::MONITORING_REVIEW),
        _ => None,
    }
}
