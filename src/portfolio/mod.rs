//! Administrative portfolio overview.
//!
//! Aggregates stored compliance reports across organizations: the latest
//! status of every organization, a status breakdown over all assessments,
//! SDF counts, the average score and the most recent submissions.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{ComplianceReport, OrganizationRef};
use crate::scoring::{ComplianceStatus, round2};

/// Status label for organizations without any assessment.
pub const NOT_ASSESSED: &str = "Not Assessed";

/// Number of entries in [`PortfolioSummary::recent`].
pub const RECENT_LIMIT: usize = 5;

/// Latest standing of one organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationStatus {
    pub org_id: String,
    pub organization_name: String,
    pub latest_score: Option<f64>,
    /// Compliance status name, or [`NOT_ASSESSED`]
    pub status: String,
    pub last_assessment: Option<DateTime<Utc>>,
    pub is_sdf: bool,
    pub assessment_count: usize,
}

/// Count and share of assessments in one status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: ComplianceStatus,
    pub count: usize,
    /// Share of all assessments, rounded to one decimal
    pub percentage: f64,
}

/// One line of the recent-assessments list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentAssessment {
    pub organization_name: String,
    pub score: f64,
    pub status: ComplianceStatus,
    pub report_date: DateTime<Utc>,
}

/// Portfolio-wide compliance overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct PortfolioSummary {
    pub total_organizations: usize,
    pub total_assessments: usize,
    /// Mean score over all assessments, two decimals; zero when none
    pub average_score: f64,
    pub status_breakdown: Vec<StatusCount>,
    pub sdf_organizations: usize,
    pub regular_organizations: usize,
    pub organizations: Vec<OrganizationStatus>,
    /// Most recent assessments, newest first
    pub recent: Vec<RecentAssessment>,
}

impl PortfolioSummary {
    /// Build the overview.
    ///
    /// `known` lists registered organizations, including ones that never
    /// submitted; organizations that appear only in `reports` are added in
    /// first-seen order.
    pub fn from_reports(known: &[OrganizationRef], reports: &[ComplianceReport]) -> Self {
        let mut latest: IndexMap<&str, OrganizationStatus> = known
            .iter()
            .map(|org| {
                (
                    org.org_id.as_str(),
                    OrganizationStatus {
                        org_id: org.org_id.clone(),
                        organization_name: org.organization_name.clone(),
                        latest_score: None,
                        status: NOT_ASSESSED.to_string(),
                        last_assessment: None,
                        is_sdf: false,
                        assessment_count: 0,
                    },
                )
            })
            .collect();

        for report in reports {
            let entry = latest
                .entry(report.org_id.as_str())
                .or_insert_with(|| OrganizationStatus {
                    org_id: report.org_id.clone(),
                    organization_name: report.organization_name.clone(),
                    latest_score: None,
                    status: NOT_ASSESSED.to_string(),
                    last_assessment: None,
                    is_sdf: false,
                    assessment_count: 0,
                });
            entry.assessment_count += 1;
            let newer = entry
                .last_assessment
                .is_none_or(|seen| report.report_date >= seen);
            if newer {
                entry.latest_score = Some(report.score);
                entry.status = report.status.name().to_string();
                entry.last_assessment = Some(report.report_date);
                entry.is_sdf = report.is_sdf;
            }
        }

        let total_assessments = reports.len();
        let status_breakdown = ComplianceStatus::all()
            .iter()
            .map(|status| {
                let count = reports.iter().filter(|r| r.status == *status).count();
                StatusCount {
                    status: *status,
                    count,
                    percentage: share(count, total_assessments),
                }
            })
            .collect();

        let average_score = if reports.is_empty() {
            0.0
        } else {
            round2(reports.iter().map(|r| r.score).sum::<f64>() / total_assessments as f64)
        };

        let mut by_date: Vec<&ComplianceReport> = reports.iter().collect();
        by_date.sort_by(|a, b| b.report_date.cmp(&a.report_date));
        let recent = by_date
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|r| RecentAssessment {
                organization_name: r.organization_name.clone(),
                score: r.score,
                status: r.status,
                report_date: r.report_date,
            })
            .collect();

        let organizations: Vec<OrganizationStatus> = latest.into_values().collect();
        let sdf_organizations = organizations.iter().filter(|o| o.is_sdf).count();

        Self {
            total_organizations: organizations.len(),
            total_assessments,
            average_score,
            status_breakdown,
            sdf_organizations,
            regular_organizations: organizations.len() - sdf_organizations,
            organizations,
            recent,
        }
    }

    #[must_use]
    pub fn count_for(&self, status: ComplianceStatus) -> usize {
        self.status_breakdown
            .iter()
            .find(|s| s.status == status)
            .map_or(0, |s| s.count)
    }
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64 * 1000.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report(org_id: &str, name: &str, score: f64, day: u32, is_sdf: bool) -> ComplianceReport {
        let (status, risk) = crate::scoring::classify_risk(score);
        ComplianceReport {
            id: format!("r-{org_id}-{day}"),
            org_id: org_id.to_string(),
            assessment_id: format!("a-{org_id}-{day}"),
            organization_name: name.to_string(),
            score,
            status,
            risk,
            is_sdf,
            sdf_score: if is_sdf { 12 } else { 2 },
            recommendations: Vec::new(),
            category_scores: IndexMap::new(),
            report_date: Utc.with_ymd_and_hms(2025, 4, day, 10, 0, 0).unwrap(),
            scoring_engine_version: "1.0".to_string(),
        }
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = PortfolioSummary::from_reports(&[], &[]);
        assert_eq!(summary.total_assessments, 0);
        assert_eq!(summary.average_score, 0.0);
        assert!(summary.status_breakdown.iter().all(|s| s.percentage == 0.0));
        assert!(summary.recent.is_empty());
    }

    #[test]
    fn test_not_assessed_organization() {
        let known = vec![OrganizationRef::new("o1", "Idle Corp")];
        let summary = PortfolioSummary::from_reports(&known, &[]);
        assert_eq!(summary.total_organizations, 1);
        assert_eq!(summary.organizations[0].status, NOT_ASSESSED);
        assert_eq!(summary.organizations[0].latest_score, None);
    }

    #[test]
    fn test_latest_report_wins() {
        let reports = vec![
            report("o1", "Acme", 40.0, 3, false),
            report("o1", "Acme", 85.0, 9, true),
            report("o1", "Acme", 60.0, 5, false),
        ];
        let summary = PortfolioSummary::from_reports(&[], &reports);
        let acme = &summary.organizations[0];
        assert_eq!(acme.latest_score, Some(85.0));
        assert_eq!(acme.status, "Fully Compliant");
        assert!(acme.is_sdf);
        assert_eq!(acme.assessment_count, 3);
        assert_eq!(summary.sdf_organizations, 1);
    }

    #[test]
    fn test_breakdown_and_average() {
        let known = vec![
            OrganizationRef::new("o1", "Acme"),
            OrganizationRef::new("o2", "Globex"),
            OrganizationRef::new("o3", "Initech"),
        ];
        let reports = vec![
            report("o1", "Acme", 90.0, 1, true),
            report("o2", "Globex", 55.0, 2, false),
            report("o2", "Globex", 30.0, 3, false),
        ];
        let summary = PortfolioSummary::from_reports(&known, &reports);

        assert_eq!(summary.total_organizations, 3);
        assert_eq!(summary.total_assessments, 3);
        assert_eq!(summary.average_score, 58.33);
        assert_eq!(summary.count_for(ComplianceStatus::FullyCompliant), 1);
        assert_eq!(summary.count_for(ComplianceStatus::NonCompliant), 1);
        assert_eq!(summary.status_breakdown[1].percentage, 33.3);
        assert_eq!(summary.sdf_organizations, 1);
        assert_eq!(summary.regular_organizations, 2);
    }

    #[test]
    fn test_recent_newest_first_capped() {
        let reports: Vec<_> = (1..=7)
            .map(|day| report(&format!("o{day}"), &format!("Org {day}"), 70.0, day, false))
            .collect();
        let summary = PortfolioSummary::from_reports(&[], &reports);
        assert_eq!(summary.recent.len(), RECENT_LIMIT);
        assert_eq!(summary.recent[0].organization_name, "Org 7");
        assert_eq!(summary.recent[4].organization_name, "Org 3");
    }
}
