//! Persisted assessment outputs.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::AnswerSet;
use crate::scoring::{CategoryScore, ComplianceStatus, Recommendation, RiskLevel};

/// Minimal organization identity used when listing a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRef {
    pub org_id: String,
    pub organization_name: String,
}

impl OrganizationRef {
    pub fn new(org_id: impl Into<String>, organization_name: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            organization_name: organization_name.into(),
        }
    }
}

/// One questionnaire submission and its score. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: String,
    pub org_id: String,
    pub answers: AnswerSet,
    pub score: f64,
    pub status: ComplianceStatus,
    pub risk: RiskLevel,
    pub category_scores: IndexMap<String, CategoryScore>,
    pub created_at: DateTime<Utc>,
}

/// Report generated alongside an [`AssessmentRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub id: String,
    pub org_id: String,
    pub assessment_id: String,
    pub organization_name: String,
    pub score: f64,
    pub status: ComplianceStatus,
    pub risk: RiskLevel,
    pub is_sdf: bool,
    pub sdf_score: u32,
    pub recommendations: Vec<Recommendation>,
    pub category_scores: IndexMap<String, CategoryScore>,
    pub report_date: DateTime<Utc>,
    pub scoring_engine_version: String,
}

impl ComplianceReport {
    #[must_use]
    pub fn organization(&self) -> OrganizationRef {
        OrganizationRef::new(&self.org_id, &self.organization_name)
    }
}
