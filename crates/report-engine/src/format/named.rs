//! Sections with a fixed, hand-ordered field list and display labels.
//! Fields outside the list are ignored even when present in stored data.

use serde_json::Value;
use site_types::SectionContent;

/// (stored field key, display label) in render order.
pub type FieldList = &'static [(&'static str, &'static str)];

pub const FRONT_COVER: FieldList = &[
    ("project_name", "Project Name"),
    ("client_name", "Client"),
    ("principal_contractor", "Principal Contractor"),
    ("principal_designer", "Principal Designer"),
    ("site_address", "Site Address"),
    ("start_date", "Start Date"),
    ("expected_duration", "Expected Duration"),
];

pub const SITE_INFORMATION: FieldList = &[
    ("site_address", "Site Address"),
    ("access", "Access & Egress"),
    ("parking", "Parking"),
    ("site_security", "Site Security"),
    ("existing_hazards", "Existing Hazards"),
    ("services", "Existing Services"),
    ("welfare_location", "Welfare Location"),
];

pub const PROJECT_DESCRIPTION: FieldList = &[
    ("description", "Description of Works"),
    ("scope", "Scope"),
    ("sequence", "Sequence of Works"),
    ("methods", "Key Methods"),
];

pub const HOURS_TEAM: FieldList = &[
    ("working_hours", "Working Hours"),
    ("site_manager", "Site Manager"),
    ("site_supervisor", "Site Supervisor"),
    ("first_aider", "First Aider"),
    ("expected_workforce", "Expected Workforce"),
];

pub const FIRST_AID: FieldList = &[
    ("first_aiders", "First Aiders"),
    ("kit_location", "First Aid Kit Location"),
    ("accident_book", "Accident Book Location"),
    ("nearest_hospital", "Nearest A&E"),
    ("emergency_contact", "Emergency Contact"),
];

pub const RESCUE_PLAN: FieldList = &[
    ("scenarios", "Rescue Scenarios"),
    ("equipment", "Rescue Equipment"),
    ("trained_personnel", "Trained Personnel"),
    ("procedure", "Rescue Procedure"),
];

pub const EMERGENCY_PROCEDURES: FieldList = &[
    ("fire_procedure", "Fire Procedure"),
    ("assembly_point", "Assembly Point"),
    ("escape_routes", "Escape Routes"),
    ("spill_procedure", "Spill Procedure"),
];

pub const INDUCTION_TRAINING: FieldList = &[
    ("induction_arrangements", "Induction Arrangements"),
    ("training_records", "Training Records"),
    ("toolbox_talks", "Toolbox Talks"),
];

pub const MONITORING_REVIEW: FieldList = &[
    ("inspection_frequency", "Inspection Frequency"),
    ("review_frequency", "Review Frequency"),
    ("responsible_person", "Responsible Person"),
    ("last_reviewed", "Last Reviewed"),
];

/// Format a named section into ordered label/value rows. `None` when no
/// listed field is populated.
pub fn format_named(fields: FieldList, value: &Value) -> Option<Vec<(String, String)>> {
    let map = value.as_object()?;
    let mut rows = Vec::new();
    for (key, label) in fields {
        let Some(raw) = map.get(*key) else { continue };
        let Some(content) = SectionContent::from_value(raw) else { continue };
        rows.push(((*label).to_string(), content.as_text()));
    }
    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_rows_follow_field_list_order_not_data_order() {
        let value = json!({
            "site_manager": "D Okafor",
            "working_hours": "07:30 - 17:00 Mon-Fri",
        });
        let rows = format_named(HOURS_TEAM, &value).unwrap();
        assert_eq!(rows[0].0, "Working Hours");
        assert_eq!(rows[1].0, "Site Manager");
    }

    #[test]
    fn test_unlisted_fields_are_ignored() {
        let value = json!({
            "working_hours": "08:00 - 16:00",
            "legacy_field": "ignore me",
        });
        let rows = format_named(HOURS_TEAM, &value).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_empty_section_is_none() {
        assert_eq!(format_named(FIRST_AID, &json!({})), None);
        assert_eq!(
            format_named(FIRST_AID, &json!({"first_aiders": "", "kit_location": null})),
            None
        );
    }

    #[test]
    fn test_array_field_flattens_to_lines() {
        let value = json!({"first_aiders": ["K Patel", "S Moran"]});
        let rows = format_named(FIRST_AID, &value).unwrap();
        assert_eq!(rows[0].1, "K Patel\nS Moran");
    }
}
