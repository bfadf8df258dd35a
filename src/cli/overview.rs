//! Overview command handler.
//!
//! Implements the `overview` subcommand: the administrator's portfolio view
//! across stored compliance reports.

use crate::model::OrganizationRef;
use crate::pipeline::{
    OutputOptions, PipelineError, exit_codes, load_document, load_reports, output_portfolio,
};
use crate::portfolio::PortfolioSummary;
use anyhow::Result;
use std::path::PathBuf;

/// Run the overview command.
///
/// `organizations` optionally lists every known organization so that those
/// without reports show up as "Not Assessed".
pub fn run_overview(
    report_paths: Vec<PathBuf>,
    organizations: Option<PathBuf>,
    options: &OutputOptions,
) -> Result<i32> {
    let reports = load_reports(&report_paths).map_err(|source| PipelineError::InputFailed {
        path: format!("{} report file(s)", report_paths.len()),
        source,
    })?;

    let known: Vec<OrganizationRef> = match &organizations {
        Some(path) => load_document(path).map_err(|source| PipelineError::InputFailed {
            path: path.display().to_string(),
            source,
        })?,
        None => Vec::new(),
    };

    if !options.quiet {
        tracing::info!(
            "Loaded {} report(s) for {} known organization(s)",
            reports.len(),
            known.len()
        );
    }

    let summary = PortfolioSummary::from_reports(&known, &reports);
    output_portfolio(&summary, options).map_err(|source| PipelineError::ReportFailed { source })?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;

    #[test]
    fn test_overview_without_reports_lists_known_orgs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let orgs = tmp.path().join("orgs.json");
        std::fs::write(
            &orgs,
            r#"[{"orgId": "org-1", "organizationName": "Acme"},
                {"orgId": "org-2", "organizationName": "Globex"}]"#,
        )
        .unwrap();
        let out = tmp.path().join("overview.json");
        let options = OutputOptions {
            format: ReportFormat::Json,
            file: Some(out.clone()),
            no_color: true,
            quiet: true,
        };

        run_overview(Vec::new(), Some(orgs), &options).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["summary"]["total_organizations"], 2);
        assert_eq!(value["summary"]["organizations"][1]["status"], "Not Assessed");
    }

    #[test]
    fn test_overview_bad_report_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let report = tmp.path().join("report.json");
        std::fs::write(&report, r#"{"score": "high"}"#).unwrap();

        let err = run_overview(vec![report], None, &OutputOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("Input failed for 1 report file(s)"));
    }
}
