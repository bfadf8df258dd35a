//! Certificate command handler.
//!
//! Implements the `certificate` subcommand: issue a compliance certificate
//! from an organization's most recent report.

use crate::model::ComplianceReport;
use crate::pipeline::{
    OutputTarget, PipelineError, auto_detect_format, exit_codes, load_reports, should_use_color,
    write_output,
};
use crate::reports::{ReportFormat, ansi_color};
use crate::scoring::{CertificateLevel, CertificateOutcome};
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Run the certificate command, returning the desired exit code.
///
/// The file may hold several reports; the newest one decides eligibility.
/// Ineligible organizations exit with `BELOW_THRESHOLD`.
pub fn run_certificate(
    report_path: PathBuf,
    issued_at: Option<DateTime<Utc>>,
    format: ReportFormat,
    output_file: Option<PathBuf>,
    no_color: bool,
) -> Result<i32> {
    let reports = load_reports(std::slice::from_ref(&report_path)).map_err(|source| {
        PipelineError::InputFailed {
            path: report_path.display().to_string(),
            source,
        }
    })?;
    let report = latest_report(&reports)
        .ok_or_else(|| anyhow!("No compliance report found in {}", report_path.display()))?;

    let outcome = CertificateOutcome::evaluate(
        &report.org_id,
        &report.organization_name,
        report.score,
        issued_at.unwrap_or_else(Utc::now),
    );
    match &outcome {
        CertificateOutcome::Issued(cert) => {
            tracing::info!(certificate_id = %cert.certificate_id, "Certificate issued");
        }
        CertificateOutcome::Ineligible { score, .. } => {
            tracing::warn!(org_id = %report.org_id, score, "Organization is not eligible");
        }
    }

    let target = OutputTarget::from_option(output_file);
    let content = match auto_detect_format(format, &target) {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&outcome).context("Failed to serialize certificate")?
        }
        _ => format_certificate_text(&outcome, should_use_color(no_color, &target)),
    };
    write_output(&content, &target, false)?;

    Ok(match outcome {
        CertificateOutcome::Issued(_) => exit_codes::SUCCESS,
        CertificateOutcome::Ineligible { .. } => exit_codes::BELOW_THRESHOLD,
    })
}

fn latest_report(reports: &[ComplianceReport]) -> Option<&ComplianceReport> {
    reports.iter().max_by_key(|r| r.report_date)
}

fn format_certificate_text(outcome: &CertificateOutcome, colored: bool) -> String {
    let lines = match outcome {
        CertificateOutcome::Issued(cert) => {
            let level_color = match cert.level {
                CertificateLevel::Gold => "yellow",
                CertificateLevel::Silver => "bold",
            };
            vec![
                ansi_color("DPDP Compliance Certificate", "bold", colored),
                String::new(),
                format!("  Certificate:  {}", cert.certificate_id),
                format!("  Organization: {}", cert.organization_name),
                format!("  Score:        {:.2}%", cert.compliance_score),
                format!(
                    "  Level:        {}",
                    ansi_color(cert.level.name(), level_color, colored)
                ),
                format!("  Issued:       {}", cert.issue_date.format("%Y-%m-%d")),
                format!("  Valid until:  {}", cert.valid_until.format("%Y-%m-%d")),
            ]
        }
        CertificateOutcome::Ineligible {
            score,
            required_score,
        } => vec![
            ansi_color("Not eligible for certification", "red", colored),
            format!("  Score {score:.2}% is below the required {required_score:.0}%"),
        ],
    };
    lines.join("\n")
}
