//! Document records the renderer consumes.
//!
//! Each record arrives fully resolved: joined entities (project, supplier,
//! vehicle, equipment) are already flattened onto the record by the service
//! layer before rendering starts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::checklist::{aggregate_status, ChecklistItem, ChecklistStatus};
use crate::hazard::Hazard;
use crate::purchase_order::{round2, PurchaseOrderItem, VAT_RATE};

/// Construction Phase Plan. Section payloads stay loosely typed (legacy form
/// data) and are normalized per section at the formatter boundary; the fixed
/// section ordering is owned by the renderer, not by map insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cpp {
    pub project_name: String,
    /// Section key (snake_case) -> raw stored payload.
    #[serde(default)]
    pub sections: Map<String, Value>,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
}

impl Cpp {
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.sections.get(key)
    }
}

/// One titled block of a policy document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySection {
    pub title: String,
    pub content: String,
}

/// Health & safety policy: statement of intent, organisation, arrangements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HsPolicy {
    pub version: String,
    #[serde(default)]
    pub review_date: Option<NaiveDate>,
    pub sections: Vec<PolicySection>,
}

/// Any other named company policy with free-text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherPolicy {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub review_date: Option<NaiveDate>,
    pub content: String,
}

/// Equipment inspection checklist. `next_inspection_due` drives the
/// in-date/overdue coloring on the details box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentChecklist {
    pub equipment_name: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub next_inspection_due: Option<NaiveDate>,
    pub items: Vec<ChecklistItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EquipmentChecklist {
    pub fn status(&self) -> ChecklistStatus {
        aggregate_status(&self.items)
    }

    /// Overdue when the due date is strictly before the reference date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.next_inspection_due.is_some_and(|due| due < today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckFrequency {
    Daily,
    Weekly,
}

impl CheckFrequency {
    pub fn label(self) -> &'static str {
        match self {
            CheckFrequency::Daily => "Daily",
            CheckFrequency::Weekly => "Weekly",
        }
    }
}

/// Vehicle walk-around checklist split into outside and inside checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleChecklist {
    pub registration: String,
    #[serde(default)]
    pub make_model: Option<String>,
    pub frequency: CheckFrequency,
    pub date: NaiveDate,
    #[serde(default)]
    pub outside_checks: Vec<ChecklistItem>,
    #[serde(default)]
    pub inside_checks: Vec<ChecklistItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl VehicleChecklist {
    /// Fail iff any check in either group failed.
    pub fn status(&self) -> ChecklistStatus {
        let all_pass = aggregate_status(&self.outside_checks) == ChecklistStatus::Pass
            && aggregate_status(&self.inside_checks) == ChecklistStatus::Pass;
        if all_pass {
            ChecklistStatus::Pass
        } else {
            ChecklistStatus::Fail
        }
    }
}

/// Purchase order with supplier details resolved onto the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub po_number: String,
    pub date: NaiveDate,
    pub supplier_name: String,
    #[serde(default)]
    pub supplier_address: Vec<String>,
    #[serde(default)]
    pub project: Option<String>,
    pub items: Vec<PurchaseOrderItem>,
    #[serde(default)]
    pub include_vat: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PurchaseOrder {
    pub fn subtotal(&self) -> f64 {
        round2(self.items.iter().map(|i| i.line_total()).sum())
    }

    /// VAT at 20%, or zero when the order excludes it.
    pub fn vat(&self) -> f64 {
        if self.include_vat {
            round2(self.subtotal() * VAT_RATE)
        } else {
            0.0
        }
    }

    pub fn total(&self) -> f64 {
        round2(self.subtotal() + self.vat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn po_item(qty: f64, price: f64) -> PurchaseOrderItem {
        PurchaseOrderItem {
            qty,
            description: "item".into(),
            units: "each".into(),
            price,
        }
    }

    fn order(include_vat: bool) -> PurchaseOrder {
        PurchaseOrder {
            po_number: "PO-0042".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            supplier_name: "Brampton Builders Merchants".into(),
            supplier_address: vec!["12 Forge Road".into(), "York".into()],
            project: Some("Mill Lane Phase 2".into()),
            items: vec![po_item(10.0, 3.5), po_item(4.0, 12.25)],
            include_vat,
            notes: None,
        }
    }

    #[test]
    fn test_subtotal_sums_line_totals() {
        assert_eq!(order(false).subtotal(), 84.0);
    }

    #[test]
    fn test_total_without_vat_equals_subtotal() {
        let po = order(false);
        assert_eq!(po.vat(), 0.0);
        assert_eq!(po.total(), po.subtotal());
    }

    #[test]
    fn test_total_with_vat_is_subtotal_times_1_2() {
        let po = order(true);
        assert_eq!(po.vat(), 16.8);
        assert_eq!(po.total(), 100.8);
        assert_eq!(po.total(), round2(po.subtotal() * 1.2));
    }

    #[test]
    fn test_vehicle_status_fails_on_inside_check() {
        use crate::checklist::ChecklistStatus;
        let checklist = VehicleChecklist {
            registration: "YX68 KPA".into(),
            make_model: None,
            frequency: CheckFrequency::Daily,
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            outside_checks: vec![],
            inside_checks: vec![ChecklistItem {
                id: "1".into(),
                name: "Seatbelts".into(),
                status: ChecklistStatus::Fail,
                notes: None,
                image_url: None,
            }],
            notes: None,
        };
        assert_eq!(checklist.status(), ChecklistStatus::Fail);
    }

    #[test]
    fn test_equipment_overdue_is_strict() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let mut checklist = EquipmentChecklist {
            equipment_name: "110v Breaker".into(),
            serial_number: None,
            date: today,
            next_inspection_due: Some(today),
            items: vec![],
            notes: None,
        };
        assert!(!checklist.is_overdue(today));
        checklist.next_inspection_due = Some(today.pred_opt().unwrap());
        assert!(checklist.is_overdue(today));
    }
}
