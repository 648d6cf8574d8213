//! Construction Phase Plan rendering: seventeen fixed-order sections plus a
//! six-column risk grid per hazard.

use site_types::{CompanySettings, Cpp, Hazard, RiskScore};

use crate::compose::{Composer, DocumentLayout, HeaderBox, HeaderRow};
use crate::format::format_section;
use crate::style::{self, Color, FontStyle};
use crate::table::{build_table, Cell, ColumnWidth, TableDescriptor, TableSpec};

use super::{company_box, section_table};

/// Section keys and display titles in the order they appear in the document.
/// Data arrival order never changes this.
pub const CPP_SECTIONS: [(&str, &str); 17] = [
    ("front_cover", "Front Cover"),
    ("site_information", "Site Information"),
    ("project_description", "Project Description"),
    ("hours_team", "Hours & Team"),
    ("management_structure", "Management Structure"),
    ("contractors", "Contractors"),
    ("first_aid", "First Aid Arrangements"),
    ("rescue_plan", "Rescue Plan"),
    ("emergency_procedures", "Emergency Procedures"),
    ("welfare_arrangements", "Welfare Arrangements"),
    ("site_rules", "Site Rules"),
    ("induction_training", "Induction & Training"),
    ("high_risk_work", "High-Risk Construction Work"),
    ("notifiable_work", "Notifiable Work"),
    ("hazard_identification", "Hazard Identification"),
    ("specific_measures", "Specific Measures"),
    ("monitoring_review", "Monitoring & Review"),
];

/// Hazard grids are inserted after this section.
const HAZARDS_AFTER: &str = "hazard_identification";

pub fn compose_cpp(record: &Cpp, settings: &CompanySettings) -> DocumentLayout {
    let header_left = company_box(settings);
    let header_right = HeaderBox::new(
        "Document Details",
        vec![
            HeaderRow::new("Document", "Construction Phase Plan"),
            HeaderRow::new("Project", &record.project_name),
        ],
    );

    let mut composer = Composer::new(DocumentLayout::content_start(&header_left, &header_right));

    for (key, title) in CPP_SECTIONS {
        if let Some(raw) = record.section(key) {
            if let Some(block) = format_section(key, raw) {
                if let Some(table) = section_table(title, block) {
                    composer.place_table(table);
                }
            }
        }
        if key == HAZARDS_AFTER {
            for hazard in &record.hazards {
                if let Some(table) = hazard_table(hazard) {
                    composer.place_block(table);
                }
            }
        }
    }

    DocumentLayout {
        title: "Construction Phase Plan".to_string(),
        header_left,
        header_right,
        pages: composer.finish(),
        registration_line: settings.registration_line(),
    }
}

/// Risk score coloring: high red, low green, everything between default.
fn risk_color(score: RiskScore) -> Option<Color> {
    if score.total >= 15 {
        Some(style::FAIL_RED)
    } else if score.total <= 6 {
        Some(style::PASS_GREEN)
    } else {
        None
    }
}

fn score_cells(label: &str, score: RiskScore) -> Vec<Cell> {
    let mut total = Cell::new(score.total.to_string()).with_font(FontStyle::Bold);
    if let Some(color) = risk_color(score) {
        total = total.with_text_color(color);
    }
    vec![
        Cell::label(label),
        Cell::new("Likelihood").with_font(FontStyle::Italic),
        Cell::new(score.likelihood.to_string()),
        Cell::new("Severity").with_font(FontStyle::Italic),
        Cell::new(score.severity.to_string()),
        total,
    ]
}

/// Fixed six-column grid per hazard: colored title band, persons-at-risk row,
/// before/after score rows, one full-width row per control measure.
pub fn hazard_table(hazard: &Hazard) -> Option<TableDescriptor> {
    let mut spec = TableSpec::new(vec![
        ColumnWidth::Fixed(40.0),
        ColumnWidth::Auto,
        ColumnWidth::Auto,
        ColumnWidth::Auto,
        ColumnWidth::Auto,
        ColumnWidth::Auto,
    ])
    .with_title_band(&hazard.name, style::BAND_FILL);

    spec.push_row(vec![
        Cell::label("Persons at Risk"),
        Cell::new(&hazard.persons_at_risk).spanning(5),
    ]);
    spec.push_row(score_cells("Before Controls", hazard.before));
    for measure in &hazard.control_measures {
        spec.push_row(vec![Cell::new(format!("\u{2022} {measure}")).spanning(6)]);
    }
    spec.push_row(score_cells("After Controls", hazard.after));

    build_table(spec)
}
