//! Significant Data Fiduciary classification.

use crate::model::{DataVolume, EmployeeBand, ProfileAttributes};
use serde::{Deserialize, Serialize};

/// Score at or above which an organization is treated as an SDF.
pub const SDF_THRESHOLD: u32 = 10;

/// Result of classifying a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdfClassification {
    pub score: u32,
    pub is_sdf: bool,
}

/// A single profile attribute's contribution to the SDF score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SdfFactor {
    pub factor: &'static str,
    pub points: u32,
}

/// Additive SDF classifier.
///
/// Every contribution is independent and non-negative. Missing or
/// unrecognized attribute values contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SdfClassifier;

impl SdfClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn classify(&self, profile: &ProfileAttributes) -> SdfClassification {
        let score = self.factors(profile).iter().map(|f| f.points).sum();
        SdfClassification {
            score,
            is_sdf: score >= SDF_THRESHOLD,
        }
    }

    /// Contributing factors in evaluation order. Zero-point factors are
    /// omitted.
    #[must_use]
    pub fn factors(&self, profile: &ProfileAttributes) -> Vec<SdfFactor> {
        let candidates = [
            ("Data volume", volume_points(profile.data_volume())),
            ("Employee count", employee_points(profile.employee_band())),
            (
                "Sensitive personal data",
                if profile.processes_sensitive_data() { 4 } else { 0 },
            ),
            (
                "Children's data",
                if profile.processes_children_data() { 5 } else { 0 },
            ),
            (
                "Cross-border transfer",
                if profile.transfers_cross_border() { 3 } else { 0 },
            ),
        ];
        candidates
            .into_iter()
            .filter(|(_, points)| *points > 0)
            .map(|(factor, points)| SdfFactor { factor, points })
            .collect()
    }
}

const fn volume_points(volume: Option<DataVolume>) -> u32 {
    match volume {
        Some(DataVolume::MoreThan1Million) => 5,
        Some(DataVolume::From100kTo1Million) => 3,
        Some(DataVolume::From10kTo100k) => 2,
        _ => 0,
    }
}

const fn employee_points(band: Option<EmployeeBand>) -> u32 {
    match band {
        Some(EmployeeBand::MoreThan500) => 3,
        Some(EmployeeBand::From100To500) => 2,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(json: &str) -> ProfileAttributes {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_profile() {
        let result = SdfClassifier::new().classify(&ProfileAttributes::default());
        assert_eq!(result, SdfClassification { score: 0, is_sdf: false });
    }

    #[test]
    fn test_maximum_profile() {
        let p = profile(
            r#"{"dataVolume": "more_than_1_million", "employeeCount": "more_than_500",
                "sensitiveData": "Yes", "dataTypes": ["Children Data"],
                "crossBorderTransfer": "Yes"}"#,
        );
        let result = SdfClassifier::new().classify(&p);
        assert_eq!(result, SdfClassification { score: 20, is_sdf: true });
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 3 + 2 + 5 = 10
        let p = profile(
            r#"{"dataVolume": "100k_to_1_million", "employeeCount": "100_to_500",
                "dataTypes": ["Children Data"]}"#,
        );
        let result = SdfClassifier::new().classify(&p);
        assert_eq!(result.score, 10);
        assert!(result.is_sdf);
    }

    #[test]
    fn test_just_below_threshold() {
        // 5 + 4 = 9
        let p = profile(r#"{"dataVolume": "more_than_1_million", "sensitiveData": "Yes"}"#);
        let result = SdfClassifier::new().classify(&p);
        assert_eq!(result.score, 9);
        assert!(!result.is_sdf);
    }

    #[test]
    fn test_small_volume_scores_nothing() {
        let p = profile(r#"{"dataVolume": "1k_to_10k", "employeeCount": "10_to_50"}"#);
        assert_eq!(SdfClassifier::new().classify(&p).score, 0);
    }

    #[test]
    fn test_non_string_values_contribute_nothing() {
        // volume 5 + cross-border 3; the boolean and number are ignored
        let p = profile(
            r#"{"dataVolume": "more_than_1_million", "sensitiveData": true,
                "employeeCount": 250, "crossBorderTransfer": "Yes"}"#,
        );
        let result = SdfClassifier::new().classify(&p);
        assert_eq!(result, SdfClassification { score: 8, is_sdf: false });
    }

    #[test]
    fn test_third_party_sharing_does_not_count() {
        let p = profile(r#"{"thirdPartySharing": "Yes"}"#);
        assert_eq!(SdfClassifier::new().classify(&p).score, 0);
    }

    #[test]
    fn test_factors_breakdown() {
        let p = profile(r#"{"dataVolume": "10k_to_100k", "crossBorderTransfer": "Yes"}"#);
        let factors = SdfClassifier::new().factors(&p);
        assert_eq!(
            factors,
            vec![
                SdfFactor { factor: "Data volume", points: 2 },
                SdfFactor { factor: "Cross-border transfer", points: 3 },
            ]
        );
    }
}
