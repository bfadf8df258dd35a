//! Compliance certificate issuance.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use super::risk::FULLY_COMPLIANT_THRESHOLD;

/// Minimum score for a Gold certificate.
pub const GOLD_THRESHOLD: f64 = 90.0;

/// Certificates stay valid for this many months after issue.
const VALIDITY_MONTHS: u32 = 12;

/// Number of trailing organization-id characters used in a certificate id.
const ORG_SUFFIX_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateLevel {
    Gold,
    Silver,
}

impl CertificateLevel {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
        }
    }
}

/// An issued compliance certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCertificate {
    pub certificate_id: String,
    pub organization_name: String,
    pub compliance_score: f64,
    pub level: CertificateLevel,
    pub issue_date: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

/// Outcome of a certificate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CertificateOutcome {
    Issued(ComplianceCertificate),
    Ineligible { score: f64, required_score: f64 },
}

impl CertificateOutcome {
    /// Issue a certificate for a score of at least 80. `issued_at` fixes the
    /// issue date, the id month and the validity window.
    #[must_use]
    pub fn evaluate(
        org_id: &str,
        organization_name: &str,
        score: f64,
        issued_at: DateTime<Utc>,
    ) -> Self {
        if score.is_nan() || score < FULLY_COMPLIANT_THRESHOLD {
            return Self::Ineligible {
                score,
                required_score: FULLY_COMPLIANT_THRESHOLD,
            };
        }

        let level = if score >= GOLD_THRESHOLD {
            CertificateLevel::Gold
        } else {
            CertificateLevel::Silver
        };
        // Day-of-month is clamped, so Feb 29 expires on Feb 28.
        let valid_until = issued_at
            .checked_add_months(Months::new(VALIDITY_MONTHS))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self::Issued(ComplianceCertificate {
            certificate_id: certificate_id(org_id, issued_at),
            organization_name: organization_name.to_string(),
            compliance_score: score,
            level,
            issue_date: issued_at,
            valid_until,
        })
    }

    #[must_use]
    pub const fn certificate(&self) -> Option<&ComplianceCertificate> {
        match self {
            Self::Issued(cert) => Some(cert),
            Self::Ineligible { .. } => None,
        }
    }
}

/// `DPDP-{last 8 chars of org id}-{YYYYMM}`
fn certificate_id(org_id: &str, issued_at: DateTime<Utc>) -> String {
    let chars: Vec<char> = org_id.chars().collect();
    let suffix: String = chars[chars.len().saturating_sub(ORG_SUFFIX_LEN)..]
        .iter()
        .collect();
    format!("DPDP-{suffix}-{}", issued_at.format("%Y%m"))
}
