//! Array-of-record sections: one labelled paragraph per record, blank-line
//! separated. Empty fields are dropped from a record's paragraph rather than
//! rendered as blanks.

use serde_json::Value;
use site_types::SectionContent;

use super::named::FieldList;

pub const CONTRACTORS: FieldList = &[
    ("company", "Company"),
    ("trade", "Trade"),
    ("contact", "Contact"),
    ("phone", "Phone"),
    ("start_date", "Start Date"),
];

pub const MANAGEMENT_STRUCTURE: FieldList = &[
    ("role", "Role"),
    ("name", "Name"),
    ("responsibilities", "Responsibilities"),
    ("contact", "Contact"),
];

pub const SPECIFIC_MEASURES: FieldList = &[
    ("item", "Item"),
    ("measures", "Measures"),
    ("responsible", "Responsible"),
];

pub fn fields_for(key: &str) -> Option<FieldList> {
    match key {
        "contractors" => Some(CONTRACTORS),
        "management_structure" => Some(MANAGEMENT_STRUCTURE),
        "specific_measures" => Some(SPECIFIC_MEASURES),
        _ => None,
    }
}

/// Format a record-array section. `None` when no record has any populated
/// listed field.
pub fn format_records(fields: FieldList, value: &Value) -> Option<String> {
    let items = value.as_array()?;
    let mut paragraphs = Vec::new();

    for item in items {
        let Some(map) = item.as_object() else { continue };
        let mut lines = Vec::new();
        for (key, label) in fields {
            let Some(raw) = map.get(*key) else { continue };
            let Some(content) = SectionContent::from_value(raw) else { continue };
            lines.push(format!("{label}: {}", content.as_text()));
        }
        if !lines.is_empty() {
            paragraphs.push(lines.join("\n"));
        }
    }

    if paragraphs.is_empty() {
        None
    } else {
        Some(paragraphs.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_one_paragraph_per_record() {
        let value = json!([
            {"company": "Apex Scaffolding", "trade": "Scaffolding"},
            {"company": "Volt Electrical", "trade": "Electrical", "phone": "0113 555 0101"},
        ]);
        let text = format_records(CONTRACTORS, &value).unwrap();
        assert_eq!(
            text,
            "Company: Apex Scaffolding\nTrade: Scaffolding\n\n\
             Company: Volt Electrical\nTrade: Electrical\nPhone: 0113 555 0101"
        );
    }

    #[test]
    fn test_empty_fields_dropped_from_paragraph() {
        let value = json!([{"role": "Site Manager", "name": "", "contact": null}]);
        assert_eq!(
            format_records(MANAGEMENT_STRUCTURE, &value).unwrap(),
            "Role: Site Manager"
        );
    }

    #[test]
    fn test_all_empty_records_is_none() {
        let value = json!([{"item": ""}, {}]);
        assert_eq!(format_records(SPECIFIC_MEASURES, &value), None);
        assert_eq!(format_records(SPECIFIC_MEASURES, &json!([])), None);
    }
}
