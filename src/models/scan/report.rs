use crate::models::scan::category::{CategoryId, Summary};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    High,
    Medium,
}

// Security/compliance finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub label: String,
    pub criticality: Criticality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pass {
    pub id: String,
    pub label: String,
}

// Audit from the full report that did not fully pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedAudit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: Option<f64>,
    #[serde(rename = "displayValue", skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

pub type FailedAudits = BTreeMap<CategoryId, Vec<FailedAudit>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedReport {
    pub url: String,
    #[serde(rename = "overallScore")]
    pub overall_score: f64,
    pub summary: Summary,
    pub issues: Vec<Issue>,
    pub passes: Vec<Pass>,
    #[serde(rename = "failedAudits")]
    pub failed_audits: FailedAudits,
}

impl NormalizedReport {
    pub fn failed_audits_for(&self, category: CategoryId) -> &[FailedAudit] {
        self.failed_audits
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_issue(&self, id: &str) -> bool {
        self.issues.iter().any(|issue| issue.id == id)
    }

    pub fn has_pass(&self, id: &str) -> bool {
        self.passes.iter().any(|pass| pass.id == id)
    }
}

/// Map with an empty list for every category.
pub fn empty_failed_audits() -> FailedAudits {
    CategoryId::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect()
}
