//! Composite 0-100 risk index.
//!
//! Combines the assessment score, the SDF score and the declared data
//! volume into a single number for dashboards. Higher means riskier.

use crate::model::DataVolume;
use serde::{Deserialize, Serialize};

use super::risk::{FULLY_COMPLIANT_THRESHOLD, PARTIALLY_COMPLIANT_THRESHOLD};
use super::sdf::SDF_THRESHOLD;

/// SDF score at which the elevated (but not SDF) band starts.
const SDF_ELEVATED_SCORE: u32 = 7;

const MAX_RISK_INDEX: u32 = 100;

/// Breakdown of the composite risk index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskIndex {
    pub assessment_points: u32,
    pub sdf_points: u32,
    pub volume_points: u32,
    /// Sum of the components, capped at 100
    pub total: u32,
}

impl RiskIndex {
    /// Compute the index. An unrecognized or missing volume scores as a
    /// mid-range 5.
    #[must_use]
    pub fn compute(assessment_score: f64, sdf_score: u32, data_volume: Option<DataVolume>) -> Self {
        let assessment_points = if assessment_score >= FULLY_COMPLIANT_THRESHOLD {
            10
        } else if assessment_score >= PARTIALLY_COMPLIANT_THRESHOLD {
            30
        } else {
            60
        };

        let sdf_points = if sdf_score >= SDF_THRESHOLD {
            25
        } else if sdf_score >= SDF_ELEVATED_SCORE {
            15
        } else {
            5
        };

        let volume_points = match data_volume {
            Some(DataVolume::LessThan1k) => 2,
            Some(DataVolume::From1kTo10k) | None => 5,
            Some(DataVolume::From10kTo100k) => 8,
            Some(DataVolume::From100kTo1Million) => 12,
            Some(DataVolume::MoreThan1Million) => 15,
        };

        Self {
            assessment_points,
            sdf_points,
            volume_points,
            total: (assessment_points + sdf_points + volume_points).min(MAX_RISK_INDEX),
        }
    }
}
