//! Risk-assessed hazards carried by Construction Phase Plans.

use serde::{Deserialize, Serialize};

/// Likelihood x severity risk entry, scored before and after controls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskScore {
    pub likelihood: u8,
    pub severity: u8,
    pub total: u8,
}

impl RiskScore {
    pub fn new(likelihood: u8, severity: u8) -> Self {
        Self {
            likelihood,
            severity,
            total: likelihood.saturating_mul(severity),
        }
    }
}

/// One identified hazard: before/after risk scores and the ordered list of
/// control measures applied between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub name: String,
    pub persons_at_risk: String,
    pub before: RiskScore,
    pub control_measures: Vec<String>,
    pub after: RiskScore,
}
