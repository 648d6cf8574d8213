//! Document service boundary
//!
//! This crate sits between the storage backend and the rendering engine:
//! repository traits describe the lookups each document type needs, and
//! [`DocumentService`] resolves those joins before delegating to
//! report-engine. A missing dependency is fatal and surfaces as a single
//! `Failed to generate PDF: <lookup> not found` message.

pub mod error;
pub mod service;
pub mod stores;

pub use error::{ServiceError, StoreError};
pub use service::{
    CppDraft, DocumentService, EquipmentChecklistDraft, PurchaseOrderDraft,
    VehicleChecklistDraft,
};
pub use stores::{
    Equipment, EquipmentStore, Project, ProjectStore, SettingsStore, Supplier, SupplierStore,
    Vehicle, VehicleStore,
};
