//! Pass/fail inspection lines shared by equipment and vehicle checklists.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    Pass,
    Fail,
}

impl ChecklistStatus {
    pub fn label(self) -> &'static str {
        match self {
            ChecklistStatus::Pass => "Pass",
            ChecklistStatus::Fail => "Fail",
        }
    }
}

/// One inspection line: name, pass/fail, optional note and photo reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub name: String,
    pub status: ChecklistStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Aggregate status: `Fail` iff any item failed, else `Pass`.
pub fn aggregate_status(items: &[ChecklistItem]) -> ChecklistStatus {
    if items.iter().any(|i| i.status == ChecklistStatus::Fail) {
        ChecklistStatus::Fail
    } else {
        ChecklistStatus::Pass
    }
}
