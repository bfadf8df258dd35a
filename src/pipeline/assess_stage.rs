//! Assessment stage: profile submission and questionnaire evaluation.
//!
//! Composes the pure scoring components and writes the results back through
//! an [`AssessmentStore`]. This is the only layer that logs; the scoring
//! core stays silent.

use chrono::{DateTime, Utc};
use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::catalog::QuestionCatalog;
use crate::error::{ErrorContext, Result};
use crate::model::{
    AnswerSet, AssessmentRecord, ComplianceReport, OrganizationRef, ProfileAttributes,
    ProfileRecord,
};
use crate::scoring::{
    ComplianceScorer, ComplianceStatus, RecommendationRanker, Recommendation, RiskClassifier,
    RiskLevel, SCORING_ENGINE_VERSION, ScoreResult, SdfClassification, SdfClassifier,
};
use crate::store::AssessmentStore;

/// Everything derived from one answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutcome {
    pub score: ScoreResult,
    pub status: ComplianceStatus,
    pub risk: RiskLevel,
    pub recommendations: Vec<Recommendation>,
    /// Classification taken from the stored profile; zero/false without one
    pub sdf: SdfClassification,
}

impl AssessmentOutcome {
    /// Overall percentage (rounded to two decimals)
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.score.percentage
    }
}

/// Score, classify and rank an answer set. Pure.
pub fn evaluate(
    profile: Option<&ProfileRecord>,
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
) -> AssessmentOutcome {
    let score = ComplianceScorer::new(catalog).score(answers);
    let (status, risk) = RiskClassifier::new().classify(score.percentage);
    let recommendations = RecommendationRanker::new(catalog).rank(answers);
    let sdf = profile.map_or_else(SdfClassification::default, |p| SdfClassification {
        score: p.sdf_score,
        is_sdf: p.is_sdf,
    });

    AssessmentOutcome {
        score,
        status,
        risk,
        recommendations,
        sdf,
    }
}

/// Records produced by [`assess_organization`].
#[derive(Debug, Clone)]
pub struct SubmittedAssessment {
    pub outcome: AssessmentOutcome,
    pub assessment: AssessmentRecord,
    pub report: ComplianceReport,
}

/// Evaluate a submission for a registered organization and persist the
/// resulting assessment and report.
///
/// A missing profile is not an error: the report carries `is_sdf = false`
/// and `sdf_score = 0`.
pub fn assess_organization(
    store: &dyn AssessmentStore,
    organization: &OrganizationRef,
    answers: &AnswerSet,
    catalog: &QuestionCatalog,
    now: DateTime<Utc>,
) -> Result<SubmittedAssessment> {
    let org_id = organization.org_id.as_str();
    let profile = store
        .profile(org_id)
        .with_context(|| format!("fetching profile for {org_id}"))?;
    if profile.is_none() {
        tracing::warn!(org_id, "No profile on record, assessing as non-SDF");
    }

    let outcome = evaluate(profile.as_ref(), answers, catalog);
    tracing::info!(
        org_id,
        score = outcome.percentage(),
        status = outcome.status.name(),
        "Assessment scored"
    );
    tracing::debug!(
        org_id,
        recommendations = outcome.recommendations.len(),
        "Ranked recommendations"
    );

    let assessment_id = fingerprint("assessment", org_id, now, answers);
    let assessment = AssessmentRecord {
        id: assessment_id.clone(),
        org_id: org_id.to_string(),
        answers: answers.clone(),
        score: outcome.score.percentage,
        status: outcome.status,
        risk: outcome.risk,
        category_scores: outcome.score.category_scores.clone(),
        created_at: now,
    };
    let report = ComplianceReport {
        id: fingerprint("report", org_id, now, answers),
        org_id: org_id.to_string(),
        assessment_id,
        organization_name: organization.organization_name.clone(),
        score: outcome.score.percentage,
        status: outcome.status,
        risk: outcome.risk,
        is_sdf: outcome.sdf.is_sdf,
        sdf_score: outcome.sdf.score,
        recommendations: outcome.recommendations.clone(),
        category_scores: outcome.score.category_scores.clone(),
        report_date: now,
        scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
    };

    store
        .register_organization(organization.clone())
        .context("registering organization")?;
    store
        .save_assessment(assessment.clone())
        .context("saving assessment")?;
    store.save_report(report.clone()).context("saving report")?;
    tracing::debug!(org_id, backend = store.name(), "Assessment persisted");

    Ok(SubmittedAssessment {
        outcome,
        assessment,
        report,
    })
}

/// Classify a profile and upsert it for the organization.
///
/// Returns the stored record; on resubmission its `created_at` is the
/// original one.
pub fn submit_profile(
    store: &dyn AssessmentStore,
    org_id: &str,
    attributes: ProfileAttributes,
    now: DateTime<Utc>,
) -> Result<ProfileRecord> {
    let sdf = SdfClassifier::new().classify(&attributes);
    tracing::info!(
        org_id,
        sdf_score = sdf.score,
        is_sdf = sdf.is_sdf,
        "Profile classified"
    );

    let record = ProfileRecord {
        org_id: org_id.to_string(),
        attributes,
        sdf_score: sdf.score,
        is_sdf: sdf.is_sdf,
        created_at: now,
        updated_at: now,
    };
    store
        .upsert_profile(record)
        .with_context(|| format!("storing profile for {org_id}"))
}

/// Deterministic record id: xxh3 over kind, org id, timestamp and answers.
fn fingerprint(kind: &str, org_id: &str, at: DateTime<Utc>, answers: &AnswerSet) -> String {
    let mut input = Vec::with_capacity(64 + answers.len() * 16);
    input.extend(kind.as_bytes());
    input.push(0);
    input.extend(org_id.as_bytes());
    input.push(0);
    input.extend(at.timestamp_micros().to_le_bytes());
    for (id, answer) in answers.iter() {
        input.extend(id.as_bytes());
        input.push(b'=');
        input.extend(answer.as_str().as_bytes());
        input.push(0);
    }
    format!("{:016x}", xxh3_64(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;
    use crate::scoring::Priority;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn org() -> OrganizationRef {
        OrganizationRef::new("65f1c2a9b8e7d6c5a4b3c2d1", "Acme Data Pvt Ltd")
    }

    #[test]
    fn test_evaluate_without_profile() {
        let outcome = evaluate(None, &AnswerSet::new(), QuestionCatalog::dpdp());
        assert_eq!(outcome.percentage(), 0.0);
        assert_eq!(outcome.status, ComplianceStatus::NonCompliant);
        assert_eq!(outcome.risk, RiskLevel::High);
        assert_eq!(outcome.recommendations.len(), 10);
        assert_eq!(outcome.sdf, SdfClassification::default());
    }

    #[test]
    fn test_assess_persists_both_records() {
        let store = MemoryStore::new();
        let answers = AnswerSet::uniform(QuestionCatalog::dpdp().ids(), Answer::Yes)
            .with("q18", Answer::Partial);

        let submitted =
            assess_organization(&store, &org(), &answers, QuestionCatalog::dpdp(), now()).unwrap();

        assert_eq!(submitted.report.assessment_id, submitted.assessment.id);
        assert_ne!(submitted.report.id, submitted.assessment.id);
        assert_eq!(submitted.report.status, ComplianceStatus::FullyCompliant);
        assert_eq!(submitted.report.recommendations.len(), 1);
        assert_eq!(submitted.report.recommendations[0].priority, Priority::Medium);
        assert!(!submitted.report.is_sdf);

        assert_eq!(store.assessments(&org().org_id).unwrap().len(), 1);
        assert_eq!(store.reports(&org().org_id).unwrap().len(), 1);
        assert_eq!(store.organizations().unwrap(), vec![org()]);
    }

    #[test]
    fn test_assess_uses_stored_profile() {
        let store = MemoryStore::new();
        let attributes: ProfileAttributes = serde_json::from_str(
            r#"{"dataVolume": "more_than_1_million", "sensitiveData": "Yes", "crossBorderTransfer": "Yes"}"#,
        )
        .unwrap();
        submit_profile(&store, &org().org_id, attributes, now()).unwrap();

        let submitted =
            assess_organization(&store, &org(), &AnswerSet::new(), QuestionCatalog::dpdp(), now())
                .unwrap();
        assert!(submitted.report.is_sdf);
        assert_eq!(submitted.report.sdf_score, 12);
    }

    #[test]
    fn test_submit_profile_preserves_created_at() {
        let store = MemoryStore::new();
        let first = submit_profile(&store, "org-1", ProfileAttributes::default(), now()).unwrap();
        let later = now() + chrono::Duration::days(3);
        let second = submit_profile(&store, "org-1", ProfileAttributes::default(), later).unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.updated_at, later);
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let answers = AnswerSet::new().with("q1", Answer::Yes);
        let a = fingerprint("report", "org", now(), &answers);
        let b = fingerprint("report", "org", now(), &answers);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert_ne!(a, fingerprint("report", "org", now(), &AnswerSet::new()));
        assert_ne!(a, fingerprint("assessment", "org", now(), &answers));
    }
}
