//! Service-level tests over in-memory stores: join resolution, the fatal
//! missing-dependency policy, and end-to-end generation.

use std::collections::HashMap;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use site_types::{CheckFrequency, ChecklistItem, ChecklistStatus, CompanySettings};

use doc_service::{
    DocumentService, Equipment, EquipmentStore, Project, ProjectStore, ServiceError,
    SettingsStore, StoreError, Supplier, SupplierStore, Vehicle, VehicleChecklistDraft,
    VehicleStore,
};

#[derive(Default)]
struct MemSettings(Option<CompanySettings>);

impl SettingsStore for MemSettings {
    fn load(&self) -> Result<Option<CompanySettings>, StoreError> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
struct MemProjects(HashMap<String, Project>);

impl ProjectStore for MemProjects {
    fn project(&self, id: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.0.get(id).cloned())
    }
}

#[derive(Default)]
struct MemSuppliers(HashMap<String, Supplier>);

impl SupplierStore for MemSuppliers {
    fn supplier(&self, id: &str) -> Result<Option<Supplier>, StoreError> {
        Ok(self.0.get(id).cloned())
    }
}

#[derive(Default)]
struct MemEquipment(HashMap<String, Equipment>);

impl EquipmentStore for MemEquipment {
    fn equipment(&self, id: &str) -> Result<Option<Equipment>, StoreError> {
        Ok(self.0.get(id).cloned())
    }
}

#[derive(Default)]
struct MemVehicles(HashMap<String, Vehicle>);

impl VehicleStore for MemVehicles {
    fn vehicle(&self, id: &str) -> Result<Option<Vehicle>, StoreError> {
        Ok(self.0.get(id).cloned())
    }
}

type MemService = DocumentService<MemSettings, MemProjects, MemSuppliers, MemEquipment, MemVehicles>;

fn settings() -> CompanySettings {
    CompanySettings {
        name: "Hartley Groundworks Ltd".into(),
        address_line1: "Unit 4, Mill Lane".into(),
        address_line2: None,
        city: "Leeds".into(),
        postcode: "LS1 4DJ".into(),
        phone: "0113 496 0000".into(),
        email: "office@hartleygroundworks.co.uk".into(),
        company_number: None,
        vat_number: None,
        logo_url: None,
    }
}

fn service() -> MemService {
    let mut vehicles = MemVehicles::default();
    vehicles.0.insert(
        "veh-1".into(),
        Vehicle {
            id: "veh-1".into(),
            registration: "YX68 KPA".into(),
            make_model: Some("Ford Transit".into()),
        },
    );
    DocumentService {
        settings: MemSettings(Some(settings())),
        projects: MemProjects::default(),
        suppliers: MemSuppliers::default(),
        equipment: MemEquipment::default(),
        vehicles,
    }
}

fn walkaround(vehicle_id: &str) -> VehicleChecklistDraft {
    VehicleChecklistDraft {
        vehicle_id: vehicle_id.into(),
        frequency: CheckFrequency::Daily,
        date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        outside_checks: vec![ChecklistItem {
            id: "itm-1".into(),
            name: "Engine Oil".into(),
            status: ChecklistStatus::Pass,
            notes: None,
            image_url: None,
        }],
        inside_checks: vec![],
        notes: None,
    }
}

#[test]
fn test_resolved_vehicle_checklist_renders() {
    let url = service().vehicle_checklist_pdf(&walkaround("veh-1")).unwrap();
    assert!(url.starts_with("data:application/pdf;base64,"));
}

#[test]
fn test_missing_vehicle_is_fatal_and_named() {
    let err = service().vehicle_checklist_pdf(&walkaround("veh-9")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to generate PDF: vehicle veh-9 not found"
    );
}

#[test]
fn test_missing_settings_is_fatal() {
    let mut svc = service();
    svc.settings = MemSettings(None);
    let err = svc.vehicle_checklist_pdf(&walkaround("veh-1")).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(
        err.to_string(),
        "Failed to generate PDF: company settings not found"
    );
}

#[test]
fn test_missing_project_aborts_purchase_order() {
    let mut suppliers = MemSuppliers::default();
    suppliers.0.insert(
        "sup-1".into(),
        Supplier {
            id: "sup-1".into(),
            name: "Brampton Builders Merchants".into(),
            address_lines: vec!["12 Forge Road".into(), "York".into()],
        },
    );
    let mut svc = service();
    svc.suppliers = suppliers;

    let draft = doc_service::PurchaseOrderDraft {
        po_number: "PO-0042".into(),
        date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        supplier_id: "sup-1".into(),
        project_id: Some("prj-404".into()),
        items: vec![site_types::PurchaseOrderItem {
            qty: 1.0,
            description: "Skip hire 8yd".into(),
            units: "each".into(),
            price: 240.0,
        }],
        include_vat: true,
        notes: None,
    };
    let err = svc.purchase_order_pdf(&draft).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to generate PDF: project prj-404 not found"
    );
}
