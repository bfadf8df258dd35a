//! Compliance status and risk level classification.

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the fully compliant band.
pub const FULLY_COMPLIANT_THRESHOLD: f64 = 80.0;

/// Lower bound (inclusive) of the partially compliant band.
pub const PARTIALLY_COMPLIANT_THRESHOLD: f64 = 50.0;

/// Overall compliance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ComplianceStatus {
    #[serde(rename = "Fully Compliant")]
    FullyCompliant,
    #[serde(rename = "Partially Compliant")]
    PartiallyCompliant,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

impl ComplianceStatus {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FullyCompliant => "Fully Compliant",
            Self::PartiallyCompliant => "Partially Compliant",
            Self::NonCompliant => "Non-Compliant",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::FullyCompliant,
            Self::PartiallyCompliant,
            Self::NonCompliant,
        ]
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Risk level paired with a compliance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps an overall percentage to a status and risk level.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskClassifier;

impl RiskClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classify an overall percentage. Total over all inputs: values
    /// outside `[0, 100]` land in the nearest band and NaN is non-compliant.
    #[must_use]
    pub fn classify(&self, percentage: f64) -> (ComplianceStatus, RiskLevel) {
        if percentage >= FULLY_COMPLIANT_THRESHOLD {
            (ComplianceStatus::FullyCompliant, RiskLevel::Low)
        } else if percentage >= PARTIALLY_COMPLIANT_THRESHOLD {
            (ComplianceStatus::PartiallyCompliant, RiskLevel::Medium)
        } else {
            (ComplianceStatus::NonCompliant, RiskLevel::High)
        }
    }
}
