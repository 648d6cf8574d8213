//! Per-document-type generators. Each entry point validates the company
//! settings, composes a pure layout, then draws and emits it. Composition is
//! exposed separately so layout behavior can be asserted without decoding
//! PDF bytes.

pub mod checklist;
pub mod cpp;
pub mod policy;
pub mod purchase_order;

use chrono::NaiveDate;
use site_types::CompanySettings;

use crate::assets;
use crate::compose::{DocumentLayout, HeaderBox, HeaderRow};
use crate::draw::draw_document;
use crate::emit;
use crate::error::RenderError;
use crate::format::FormattedBlock;
use crate::table::{build_table, TableDescriptor, TableSpec};

pub use checklist::{compose_equipment_checklist, compose_vehicle_checklist};
pub use cpp::compose_cpp;
pub use policy::{compose_hs_policy, compose_other_policy, PolicyDates};
pub use purchase_order::compose_purchase_order;

pub(crate) fn fmt_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// The company-information box shared by every document type.
pub(crate) fn company_box(settings: &CompanySettings) -> HeaderBox {
    let mut rows = vec![HeaderRow::new("Name", &settings.name)];
    rows.push(HeaderRow::new("Address", settings.address_lines().join(", ")));
    rows.push(HeaderRow::new("Phone", &settings.phone));
    rows.push(HeaderRow::new("Email", &settings.email));
    HeaderBox::new("Company Information", rows)
}

/// Turn a formatted section into its table form: rows get the two-column
/// label/value layout, text blobs get a single column.
pub(crate) fn section_table(title: &str, block: FormattedBlock) -> Option<TableDescriptor> {
    match block {
        FormattedBlock::Rows(rows) => build_table(TableSpec::label_value(title, &rows)),
        FormattedBlock::Text(text) => build_table(TableSpec::single_column(title, &text)),
    }
}

/// Draw and emit a composed layout: fetch the logo (non-fatal), paint, and
/// base64-encode into a data URL.
pub(crate) fn render(
    layout: &DocumentLayout,
    settings: &CompanySettings,
) -> Result<String, RenderError> {
    let logo = settings.logo_url.as_deref().and_then(assets::load_logo);
    let bytes = draw_document(layout, logo.as_ref())?;
    Ok(emit::to_data_url(&bytes))
}

pub fn generate_cpp_pdf(
    record: &site_types::Cpp,
    settings: &CompanySettings,
) -> Result<String, RenderError> {
    settings.validate()?;
    let layout = compose_cpp(record, settings);
    render(&layout, settings)
}

pub fn generate_hs_policy_pdf(
    record: &site_types::HsPolicy,
    settings: &CompanySettings,
) -> Result<String, RenderError> {
    settings.validate()?;
    let layout = compose_hs_policy(record, settings, PolicyDates::default());
    render(&layout, settings)
}

pub fn generate_other_policy_pdf(
    record: &site_types::OtherPolicy,
    settings: &CompanySettings,
) -> Result<String, RenderError> {
    settings.validate()?;
    let layout = compose_other_policy(record, settings, PolicyDates::default());
    render(&layout, settings)
}

pub fn generate_equipment_checklist_pdf(
    record: &site_types::EquipmentChecklist,
    settings: &CompanySettings,
) -> Result<String, RenderError> {
    settings.validate()?;
    let today = chrono::Utc::now().date_naive();
    let layout = compose_equipment_checklist(record, settings, today);
    render(&layout, settings)
}

pub fn generate_vehicle_checklist_pdf(
    record: &site_types::VehicleChecklist,
    settings: &CompanySettings,
) -> Result<String, RenderError> {
    settings.validate()?;
    let layout = compose_vehicle_checklist(record, settings);
    render(&layout, settings)
}

pub fn generate_purchase_order_pdf(
    record: &site_types::PurchaseOrder,
    settings: &CompanySettings,
) -> Result<String, RenderError> {
    settings.validate()?;
    let layout = compose_purchase_order(record, settings);
    render(&layout, settings)
}

/// A document record paired with the settings snapshot to render it under.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub enum GenerateRequest {
    Cpp(site_types::Cpp),
    HsPolicy(site_types::HsPolicy),
    OtherPolicy(site_types::OtherPolicy),
    EquipmentChecklist(site_types::EquipmentChecklist),
    VehicleChecklist(site_types::VehicleChecklist),
    PurchaseOrder(site_types::PurchaseOrder),
}

/// Async wrapper used by server callers: generation runs on the blocking
/// pool with a hard timeout.
#[cfg(feature = "server")]
pub async fn generate_pdf(
    request: GenerateRequest,
    settings: CompanySettings,
    timeout_ms: u64,
) -> Result<String, RenderError> {
    let task = tokio::task::spawn_blocking(move || match request {
        GenerateRequest::Cpp(r) => generate_cpp_pdf(&r, &settings),
        GenerateRequest::HsPolicy(r) => generate_hs_policy_pdf(&r, &settings),
        GenerateRequest::OtherPolicy(r) => generate_other_policy_pdf(&r, &settings),
        GenerateRequest::EquipmentChecklist(r) => generate_equipment_checklist_pdf(&r, &settings),
        GenerateRequest::VehicleChecklist(r) => generate_vehicle_checklist_pdf(&r, &settings),
        GenerateRequest::PurchaseOrder(r) => generate_purchase_order_pdf(&r, &settings),
    });

    match tokio::time::timeout(std::time::Duration::from_millis(timeout_ms), task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(RenderError::Pdf(format!(
            "generation task panicked: {join_error}"
        ))),
        Err(_elapsed) => Err(RenderError::Timeout(timeout_ms)),
    }
}
