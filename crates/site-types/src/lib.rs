//! Shared data model for construction back-office documents.
//!
//! Everything here is created and persisted upstream (CRUD forms and the
//! backing store); the rendering pipeline only reads these types as a
//! fully-resolved snapshot.

pub mod checklist;
pub mod company;
pub mod documents;
pub mod hazard;
pub mod purchase_order;
pub mod section;

pub use checklist::{aggregate_status, ChecklistItem, ChecklistStatus};
pub use company::{CompanySettings, SettingsError};
pub use documents::{
    CheckFrequency, Cpp, EquipmentChecklist, HsPolicy, OtherPolicy, PolicySection,
    PurchaseOrder, VehicleChecklist,
};
pub use hazard::{Hazard, RiskScore};
pub use purchase_order::PurchaseOrderItem;
pub use section::SectionContent;
