//! Equipment and vehicle checklists. Both render a details box with a
//! colored overall status, then one check table per group with pass/fail
//! coloring on each line.

use chrono::NaiveDate;
use site_types::{
    ChecklistItem, ChecklistStatus, CompanySettings, EquipmentChecklist, VehicleChecklist,
};

use crate::compose::{Composer, DocumentLayout, HeaderBox, HeaderRow};
use crate::style::{FAIL_RED, PASS_GREEN};
use crate::table::{
    build_table, section_header_cell, Cell, ColumnWidth, TableDescriptor, TableSpec,
};

use super::{company_box, fmt_date};

const STATUS_COLUMN_WIDTH: f32 = 25.0;

fn status_row(status: ChecklistStatus) -> HeaderRow {
    let color = match status {
        ChecklistStatus::Pass => PASS_GREEN,
        ChecklistStatus::Fail => FAIL_RED,
    };
    HeaderRow::colored("Overall Status", status.label(), color)
}

/// Check table: name, colored pass/fail, notes. `None` when the group has no
/// items, the table is omitted entirely.
fn check_table(title: &str, items: &[ChecklistItem]) -> Option<TableDescriptor> {
    if items.is_empty() {
        return None;
    }
    let mut spec = TableSpec::new(vec![
        ColumnWidth::Auto,
        ColumnWidth::Fixed(STATUS_COLUMN_WIDTH),
        ColumnWidth::Auto,
    ])
    .with_header(vec![
        section_header_cell(title, 1),
        section_header_cell("Status", 1),
        section_header_cell("Notes", 1),
    ]);
    for item in items {
        spec.push_row(vec![
            Cell::new(&item.name),
            Cell::status(item.status.label(), item.status == ChecklistStatus::Pass),
            Cell::new(item.notes.as_deref().unwrap_or("")),
        ]);
    }
    build_table(spec)
}

fn notes_table(notes: Option<&str>) -> Option<TableDescriptor> {
    let notes = notes?.trim();
    if notes.is_empty() {
        return None;
    }
    build_table(TableSpec::single_column("ADDITIONAL NOTES", notes))
}

pub fn compose_vehicle_checklist(
    record: &VehicleChecklist,
    settings: &CompanySettings,
) -> DocumentLayout {
    let vehicle = match &record.make_model {
        Some(make_model) => format!("{} ({make_model})", record.registration),
        None => record.registration.clone(),
    };
    let header_left = company_box(settings);
    let header_right = HeaderBox::new(
        "Document Details",
        vec![
            HeaderRow::new("Vehicle", vehicle),
            HeaderRow::new("Frequency", record.frequency.label()),
            HeaderRow::new("Date", fmt_date(record.date)),
            status_row(record.status()),
        ],
    );

    let mut composer = Composer::new(DocumentLayout::content_start(&header_left, &header_right));
    if let Some(table) = check_table("OUTSIDE CHECKS", &record.outside_checks) {
        composer.place_table(table);
    }
    if let Some(table) = check_table("INSIDE CHECKS", &record.inside_checks) {
        composer.place_table(table);
    }
    if let Some(table) = notes_table(record.notes.as_deref()) {
        composer.place_table(table);
    }

    DocumentLayout {
        title: "Vehicle Checklist".to_string(),
        header_left,
        header_right,
        pages: composer.finish(),
        registration_line: settings.registration_line(),
    }
}

pub fn compose_equipment_checklist(
    record: &EquipmentChecklist,
    settings: &CompanySettings,
    today: NaiveDate,
) -> DocumentLayout {
    let mut rows = vec![HeaderRow::new("Equipment", &record.equipment_name)];
    if let Some(serial) = &record.serial_number {
        rows.push(HeaderRow::new("Serial Number", serial));
    }
    rows.push(HeaderRow::new("Date", fmt_date(record.date)));
    if let Some(due) = record.next_inspection_due {
        let color = if record.is_overdue(today) { FAIL_RED } else { PASS_GREEN };
        rows.push(HeaderRow::colored("Next Inspection Due", fmt_date(due), color));
    }
    rows.push(status_row(record.status()));

    let header_left = company_box(settings);
    let header_right = HeaderBox::new("Document Details", rows);

    let mut composer = Composer::new(DocumentLayout::content_start(&header_left, &header_right));
    if let Some(table) = check_table("CHECKS", &record.items) {
        composer.place_table(table);
    }
    if let Some(table) = notes_table(record.notes.as_deref()) {
        composer.place_table(table);
    }

    DocumentLayout {
        title: "Equipment Checklist".to_string(),
        header_left,
        header_right,
        pages: composer.finish(),
        registration_line: settings.registration_line(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use site_types::CheckFrequency;

    fn settings() -> CompanySettings {
        CompanySettings {
            name: "Hartley Groundworks Ltd".into(),
            address_line1: "Unit 4, Mill Lane".into(),
            address_line2: None,
            city: "Leeds".into(),
            postcode: "LS1 4DJ".into(),
            phone: "0113 496 0000".into(),
            email: "office@hartleygroundworks.co.uk".into(),
            company_number: Some("09876543".into()),
            vat_number: None,
            logo_url: None,
        }
    }

    fn item(name: &str, status: ChecklistStatus, notes: Option<&str>) -> ChecklistItem {
        ChecklistItem {
            id: format!("itm-{name}"),
            name: name.into(),
            status,
            notes: notes.map(Into::into),
            image_url: None,
        }
    }

    #[test]
    fn test_vehicle_checklist_omits_empty_groups_and_flags_failure() {
        let record = VehicleChecklist {
            registration: "YX68 KPA".into(),
            make_model: None,
            frequency: CheckFrequency::Daily,
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            outside_checks: vec![
                item("Engine Oil", ChecklistStatus::Pass, None),
                item("Tyre Tread & Sidewalls", ChecklistStatus::Fail, Some("worn")),
            ],
            inside_checks: vec![],
            notes: None,
        };
        let layout = compose_vehicle_checklist(&record, &settings());

        assert_eq!(layout.pages.len(), 1);
        let tables = &layout.pages[0].tables;
        assert_eq!(tables.len(), 1);

        let outside = &tables[0].table;
        assert_eq!(outside.header.as_ref().unwrap().cells[0].lines[0], "OUTSIDE CHECKS");
        assert_eq!(outside.rows.len(), 2);
        assert_eq!(outside.rows[1].cells[1].style.text_color, Some(FAIL_RED));
        assert_eq!(outside.rows[1].cells[2].lines[0], "worn");

        let status = layout.header_right.rows.last().unwrap();
        assert_eq!(status.value, "Fail");
        assert_eq!(status.value_color, Some(FAIL_RED));
    }

    #[test]
    fn test_vehicle_details_include_make_model_and_frequency() {
        let record = VehicleChecklist {
            registration: "YX68 KPA".into(),
            make_model: Some("Ford Transit".into()),
            frequency: CheckFrequency::Weekly,
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            outside_checks: vec![item("Lights", ChecklistStatus::Pass, None)],
            inside_checks: vec![],
            notes: None,
        };
        let layout = compose_vehicle_checklist(&record, &settings());
        assert_eq!(layout.header_right.rows[0].value, "YX68 KPA (Ford Transit)");
        assert_eq!(layout.header_right.rows[1].value, "Weekly");
    }

    #[test]
    fn test_equipment_overdue_due_date_is_red() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let record = EquipmentChecklist {
            equipment_name: "110v Breaker".into(),
            serial_number: Some("BRK-221".into()),
            date: today,
            next_inspection_due: NaiveDate::from_ymd_opt(2026, 2, 1),
            items: vec![item("Casing intact", ChecklistStatus::Pass, None)],
            notes: None,
        };
        let layout = compose_equipment_checklist(&record, &settings(), today);
        let due = layout
            .header_right
            .rows
            .iter()
            .find(|r| r.label == "Next Inspection Due")
            .unwrap();
        assert_eq!(due.value, "01/02/2026");
        assert_eq!(due.value_color, Some(FAIL_RED));
    }

    #[test]
    fn test_equipment_in_date_due_date_is_green() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let record = EquipmentChecklist {
            equipment_name: "110v Breaker".into(),
            serial_number: None,
            date: today,
            next_inspection_due: NaiveDate::from_ymd_opt(2026, 9, 1),
            items: vec![item("Casing intact", ChecklistStatus::Pass, None)],
            notes: Some("Greased moving parts.".into()),
        };
        let layout = compose_equipment_checklist(&record, &settings(), today);
        let due = layout
            .header_right
            .rows
            .iter()
            .find(|r| r.label == "Next Inspection Due")
            .unwrap();
        assert_eq!(due.value_color, Some(PASS_GREEN));

        // checks table + notes table
        assert_eq!(layout.pages[0].tables.len(), 2);
    }
}
