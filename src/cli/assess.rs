//! Assess command handler.
//!
//! Implements the `assess` subcommand: score a questionnaire submission for
//! one organization and render its compliance report.

use crate::config::AppConfig;
use crate::model::OrganizationRef;
use crate::pipeline::{
    OutputOptions, PipelineError, SubmittedAssessment, assess_organization, exit_codes,
    load_answers, load_profile, output_assessment, submit_profile,
};
use crate::reports::ReportConfig;
use crate::scoring::{ComplianceStatus, RiskIndex};
use crate::store::MemoryStore;
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

/// Inputs for a single assessment run.
#[derive(Debug, Clone)]
pub struct AssessConfig {
    /// Answer submission (bare map or `{"answers": {...}}`)
    pub answers: PathBuf,
    /// Optional profile; without one the organization is treated as non-SDF
    pub profile: Option<PathBuf>,
    pub organization: OrganizationRef,
    /// Include the composite risk index in the report
    pub risk_index: bool,
    /// Effective configuration (file merged with CLI flags)
    pub app: AppConfig,
}

/// Run the assess command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_assess(config: AssessConfig) -> Result<i32> {
    let catalog = config.app.load_catalog()?;
    let answers = load_answers(&config.answers).map_err(|source| PipelineError::InputFailed {
        path: config.answers.display().to_string(),
        source,
    })?;
    tracing::debug!(
        answered = answers.len(),
        questions = catalog.len(),
        "Loaded answers"
    );

    let store = MemoryStore::new();
    let now = Utc::now();
    let org_id = config.organization.org_id.as_str();

    let profile = match &config.profile {
        Some(path) => {
            let attributes =
                load_profile(path).map_err(|source| PipelineError::InputFailed {
                    path: path.display().to_string(),
                    source,
                })?;
            Some(
                submit_profile(&store, org_id, attributes, now)
                    .map_err(|e| PipelineError::AssessmentFailed { source: e.into() })?,
            )
        }
        None => None,
    };

    let submitted = assess_organization(&store, &config.organization, &answers, &catalog, now)
        .map_err(|e| PipelineError::AssessmentFailed { source: e.into() })?;

    let mut report_config = ReportConfig::new();
    if config.risk_index {
        let volume = profile.as_ref().and_then(|p| p.attributes.data_volume());
        report_config.risk_index = Some(RiskIndex::compute(
            submitted.report.score,
            submitted.report.sdf_score,
            volume,
        ));
    }

    let options = OutputOptions {
        format: config.app.output.format,
        file: config.app.output.file.clone(),
        no_color: config.app.output.no_color,
        quiet: config.app.behavior.quiet,
    };
    output_assessment(&submitted.report, &report_config, &options)
        .map_err(|source| PipelineError::ReportFailed { source })?;

    Ok(determine_exit_code(&config.app, &submitted))
}

/// Map the outcome onto CI exit codes. Non-compliance outranks the threshold.
fn determine_exit_code(app: &AppConfig, submitted: &SubmittedAssessment) -> i32 {
    if app.behavior.fail_on_non_compliant
        && submitted.outcome.status == ComplianceStatus::NonCompliant
    {
        return exit_codes::NON_COMPLIANT;
    }
    if let Some(min_score) = app.behavior.min_score
        && submitted.outcome.percentage() < min_score
    {
        tracing::warn!(
            score = submitted.outcome.percentage(),
            min_score,
            "Score is below the required minimum"
        );
        return exit_codes::BELOW_THRESHOLD;
    }
    exit_codes::SUCCESS
}
