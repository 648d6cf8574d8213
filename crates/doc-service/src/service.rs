//! Join resolution: draft records arrive holding foreign keys, the service
//! looks each one up and hands report-engine a fully flattened record. Any
//! missing dependency aborts the render with a message naming the lookup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use site_types::{
    CheckFrequency, ChecklistItem, CompanySettings, Cpp, EquipmentChecklist, Hazard, HsPolicy,
    OtherPolicy, PurchaseOrder, PurchaseOrderItem, VehicleChecklist,
};

use crate::error::ServiceError;
use crate::stores::{
    EquipmentStore, ProjectStore, SettingsStore, Supplier, SupplierStore, VehicleStore,
};

/// CPP as stored: sections keyed by name, project referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CppDraft {
    pub project_id: String,
    #[serde(default)]
    pub sections: Map<String, Value>,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentChecklistDraft {
    pub equipment_id: String,
    pub date: NaiveDate,
    pub items: Vec<ChecklistItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleChecklistDraft {
    pub vehicle_id: String,
    pub frequency: CheckFrequency,
    pub date: NaiveDate,
    #[serde(default)]
    pub outside_checks: Vec<ChecklistItem>,
    #[serde(default)]
    pub inside_checks: Vec<ChecklistItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderDraft {
    pub po_number: String,
    pub date: NaiveDate,
    pub supplier_id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    pub items: Vec<PurchaseOrderItem>,
    #[serde(default)]
    pub include_vat: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Resolves drafts against the stores and renders them. Every generated
/// document needs the company settings row; joined entities are fetched per
/// document type.
pub struct DocumentService<S, P, Sp, E, V> {
    pub settings: S,
    pub projects: P,
    pub suppliers: Sp,
    pub equipment: E,
    pub vehicles: V,
}

impl<S, P, Sp, E, V> DocumentService<S, P, Sp, E, V>
where
    S: SettingsStore,
    P: ProjectStore,
    Sp: SupplierStore,
    E: EquipmentStore,
    V: VehicleStore,
{
    fn require_settings(&self) -> Result<CompanySettings, ServiceError> {
        self.settings
            .load()?
            .ok_or_else(|| ServiceError::NotFound("company settings".to_string()))
    }

    fn require_project(&self, id: &str) -> Result<String, ServiceError> {
        let project = self
            .projects
            .project(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("project {id}")))?;
        Ok(project.name)
    }

    fn require_supplier(&self, id: &str) -> Result<Supplier, ServiceError> {
        self.suppliers
            .supplier(id)?
            .ok_or_else(|| ServiceError::NotFound(format!("supplier {id}")))
    }

    pub fn cpp_pdf(&self, draft: &CppDraft) -> Result<String, ServiceError> {
        let settings = self.require_settings()?;
        let project_name = self.require_project(&draft.project_id)?;
        tracing::debug!(project = %project_name, "rendering construction phase plan");
        let record = Cpp {
            project_name,
            sections: draft.sections.clone(),
            hazards: draft.hazards.clone(),
        };
        Ok(report_engine::generate_cpp_pdf(&record, &settings)?)
    }

    pub fn hs_policy_pdf(&self, record: &HsPolicy) -> Result<String, ServiceError> {
        let settings = self.require_settings()?;
        Ok(report_engine::generate_hs_policy_pdf(record, &settings)?)
    }

    pub fn other_policy_pdf(&self, record: &OtherPolicy) -> Result<String, ServiceError> {
        let settings = self.require_settings()?;
        Ok(report_engine::generate_other_policy_pdf(record, &settings)?)
    }

    pub fn equipment_checklist_pdf(
        &self,
        draft: &EquipmentChecklistDraft,
    ) -> Result<String, ServiceError> {
        let settings = self.require_settings()?;
        let equipment = self
            .equipment
            .equipment(&draft.equipment_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("equipment {}", draft.equipment_id)))?;
        let record = EquipmentChecklist {
            equipment_name: equipment.name,
            serial_number: equipment.serial_number,
            date: draft.date,
            next_inspection_due: equipment.next_inspection_due,
            items: draft.items.clone(),
            notes: draft.notes.clone(),
        };
        Ok(report_engine::generate_equipment_checklist_pdf(&record, &settings)?)
    }

    pub fn vehicle_checklist_pdf(
        &self,
        draft: &VehicleChecklistDraft,
    ) -> Result<String, ServiceError> {
        let settings = self.require_settings()?;
        let vehicle = self
            .vehicles
            .vehicle(&draft.vehicle_id)?
            .ok_or_else(|| ServiceError::NotFound(format!("vehicle {}", draft.vehicle_id)))?;
        let record = VehicleChecklist {
            registration: vehicle.registration,
            make_model: vehicle.make_model,
            frequency: draft.frequency,
            date: draft.date,
            outside_checks: draft.outside_checks.clone(),
            inside_checks: draft.inside_checks.clone(),
            notes: draft.notes.clone(),
        };
        Ok(report_engine::generate_vehicle_checklist_pdf(&record, &settings)?)
    }

    pub fn purchase_order_pdf(&self, draft: &PurchaseOrderDraft) -> Result<String, ServiceError> {
        let settings = self.require_settings()?;
        let supplier = self.require_supplier(&draft.supplier_id)?;
        let project = match &draft.project_id {
            Some(id) => Some(self.require_project(id)?),
            None => None,
        };
        let record = PurchaseOrder {
            po_number: draft.po_number.clone(),
            date: draft.date,
            supplier_name: supplier.name,
            supplier_address: supplier.address_lines,
            project,
            items: draft.items.clone(),
            include_vat: draft.include_vat,
            notes: draft.notes.clone(),
        };
        Ok(report_engine::generate_purchase_order_pdf(&record, &settings)?)
    }
}
