//! DPDP scoring engine.
//!
//! Four pure components turn a profile and an answer set into an
//! assessment:
//!
//! - **SDF classification**: additive significance score from profile attributes
//! - **Compliance scoring**: weighted per-category and overall percentages
//! - **Risk classification**: overall percentage to status and risk level
//! - **Recommendation ranking**: prioritized remediation list, capped at ten
//!
//! None of them perform I/O or hold state; they are safe to call from any
//! number of threads. The free functions in this module use the built-in DPDP
//! catalog; the component types accept any validated [`QuestionCatalog`].
//!
//! # Usage
//!
//! ```
//! use dpdp_assess::model::{Answer, AnswerSet};
//! use dpdp_assess::scoring::{classify_risk, rank_recommendations, score_assessment};
//!
//! let answers = AnswerSet::new()
//!     .with("q1", Answer::Yes)
//!     .with("q2", Answer::Partial);
//! let result = score_assessment(&answers);
//! let (status, risk) = classify_risk(result.percentage);
//!
//! println!("{:.2}% {status} ({risk} risk)", result.percentage);
//! for rec in rank_recommendations(&answers) {
//!     println!("- [{}] {}", rec.priority, rec.action);
//! }
//! ```

mod certificate;
mod recommendations;
mod risk;
mod risk_index;
mod scorer;
mod sdf;

pub use certificate::{
    CertificateLevel, CertificateOutcome, ComplianceCertificate, GOLD_THRESHOLD,
};
pub use recommendations::{MAX_RECOMMENDATIONS, Priority, Recommendation, RecommendationRanker};
pub use risk::{
    ComplianceStatus, FULLY_COMPLIANT_THRESHOLD, PARTIALLY_COMPLIANT_THRESHOLD, RiskClassifier,
    RiskLevel,
};
pub use risk_index::RiskIndex;
pub use scorer::{CategoryScore, ComplianceScorer, ScoreResult, round2};
pub use sdf::{SDF_THRESHOLD, SdfClassification, SdfClassifier, SdfFactor};

use crate::catalog::QuestionCatalog;
use crate::model::{AnswerSet, ProfileAttributes};

/// Scoring engine version recorded on every report
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Classify a profile as a Significant Data Fiduciary.
#[must_use]
pub fn classify_sdf(profile: &ProfileAttributes) -> SdfClassification {
    SdfClassifier::new().classify(profile)
}

/// Score an answer set against the built-in DPDP catalog.
pub fn score_assessment(answers: &AnswerSet) -> ScoreResult {
    ComplianceScorer::new(QuestionCatalog::dpdp()).score(answers)
}

/// Map an overall percentage to a compliance status and risk level.
#[must_use]
pub fn classify_risk(percentage: f64) -> (ComplianceStatus, RiskLevel) {
    RiskClassifier::new().classify(percentage)
}

/// Ranked remediation list (at most ten) for the built-in DPDP catalog.
#[must_use]
pub fn rank_recommendations(answers: &AnswerSet) -> Vec<Recommendation> {
    RecommendationRanker::new(QuestionCatalog::dpdp()).rank(answers)
}
