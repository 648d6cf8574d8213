//! Policy documents: the health & safety policy and other named company
//! policies. Free-text sections render as single-column tables.

use chrono::NaiveDate;
use site_types::{CompanySettings, HsPolicy, OtherPolicy};

use crate::compose::{Composer, DocumentLayout, HeaderBox, HeaderRow};
use crate::table::{build_table, TableSpec};

use super::{company_box, fmt_date};

/// Created/edited dates stamped onto the details box. The default stamps
/// today for both, regardless of the record's persisted timestamps.
#[derive(Debug, Clone, Copy)]
pub struct PolicyDates {
    pub created: NaiveDate,
    pub edited: NaiveDate,
}

impl Default for PolicyDates {
    fn default() -> Self {
        let today = chrono::Utc::now().date_naive();
        Self { created: today, edited: today }
    }
}

impl PolicyDates {
    /// Pin both dates; used by callers that need deterministic output.
    pub fn fixed(date: NaiveDate) -> Self {
        Self { created: date, edited: date }
    }
}

fn details_box(
    version: &str,
    dates: PolicyDates,
    review_date: Option<NaiveDate>,
) -> HeaderBox {
    let mut rows = vec![
        HeaderRow::new("Version", version),
        HeaderRow::new("Created", fmt_date(dates.created)),
        HeaderRow::new("Last Edited", fmt_date(dates.edited)),
    ];
    if let Some(review) = review_date {
        rows.push(HeaderRow::new("Review Date", fmt_date(review)));
    }
    HeaderBox::new("Document Details", rows)
}

pub fn compose_hs_policy(
    record: &HsPolicy,
    settings: &CompanySettings,
    dates: PolicyDates,
) -> DocumentLayout {
    let header_left = company_box(settings);
    let header_right = details_box(&record.version, dates, record.review_date);

    let mut composer = Composer::new(DocumentLayout::content_start(&header_left, &header_right));
    for section in &record.sections {
        if section.content.trim().is_empty() {
            continue;
        }
        if let Some(table) = build_table(TableSpec::single_column(&section.title, &section.content))
        {
            composer.place_table(table);
        }
    }

    DocumentLayout {
        title: "Health & Safety Policy".to_string(),
        header_left,
        header_right,
        pages: composer.finish(),
        registration_line: settings.registration_line(),
    }
}

pub fn compose_other_policy(
    record: &OtherPolicy,
    settings: &CompanySettings,
    dates: PolicyDates,
) -> DocumentLayout {
    let header_left = company_box(settings);
    let header_right = details_box(&record.version, dates, record.review_date);

    let mut composer = Composer::new(DocumentLayout::content_start(&header_left, &header_right));
    if !record.content.trim().is_empty() {
        if let Some(table) = build_table(TableSpec::single_column(&record.title, &record.content)) {
            composer.place_table(table);
        }
    }

    DocumentLayout {
        title: record.title.clone(),
        header_left,
        header_right,
        pages: composer.finish(),
        registration_line: settings.registration_line(),
    }
}
