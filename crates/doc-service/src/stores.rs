//! Repository traits the service resolves joins through. Implementations
//! wrap whatever backend holds the records; lookups return `Ok(None)` for a
//! missing row and `Err` only for backend failures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use site_types::CompanySettings;

use crate::error::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address_lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub next_inspection_due: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub registration: String,
    #[serde(default)]
    pub make_model: Option<String>,
}

pub trait SettingsStore {
    /// The single company-settings row, or `None` when onboarding never
    /// completed.
    fn load(&self) -> Result<Option<CompanySettings>, StoreError>;
}

pub trait ProjectStore {
    fn project(&self, id: &str) -> Result<Option<Project>, StoreError>;
}

pub trait SupplierStore {
    fn supplier(&self, id: &str) -> Result<Option<Supplier>, StoreError>;
}

pub trait EquipmentStore {
    fn equipment(&self, id: &str) -> Result<Option<Equipment>, StoreError>;
}

pub trait VehicleStore {
    fn vehicle(&self, id: &str) -> Result<Option<Vehicle>, StoreError>;
}
