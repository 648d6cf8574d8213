//! Tenant-level letterhead settings stamped onto every generated document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Company settings missing required field: {0}")]
    MissingField(&'static str),
}

/// Company letterhead data: address block, contact details, registration
/// numbers and an optional hosted logo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySettings {
    pub name: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub postcode: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub company_number: Option<String>,
    #[serde(default)]
    pub vat_number: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl CompanySettings {
    /// Required letterhead fields must be non-empty before rendering starts.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let required: [(&'static str, &str); 6] = [
            ("name", &self.name),
            ("address_line1", &self.address_line1),
            ("city", &self.city),
            ("postcode", &self.postcode),
            ("phone", &self.phone),
            ("email", &self.email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(SettingsError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Address lines in letterhead order, skipping the optional second line.
    pub fn address_lines(&self) -> Vec<&str> {
        let mut lines = vec![self.address_line1.as_str()];
        if let Some(line2) = self.address_line2.as_deref() {
            if !line2.trim().is_empty() {
                lines.push(line2);
            }
        }
        lines.push(self.city.as_str());
        lines.push(self.postcode.as_str());
        lines
    }

    /// Registration line for the page footer: only the parts that exist.
    pub fn registration_line(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(num) = self.company_number.as_deref().filter(|n| !n.is_empty()) {
            parts.push(format!("Company Reg No: {num}"));
        }
        if let Some(num) = self.vat_number.as_deref().filter(|n| !n.is_empty()) {
            parts.push(format!("VAT No: {num}"));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("  |  "))
        }
    }
}
