//! Pipeline orchestration for assessments.
//!
//! This module provides the shared load → assess → report workflow used by
//! the CLI handlers and by hosts embedding the engine.

mod assess_stage;
mod input;
mod output;
mod report_stage;

pub use assess_stage::{
    AssessmentOutcome, SubmittedAssessment, assess_organization, evaluate, submit_profile,
};
pub use input::{
    load_answers, load_document, load_organization, load_profile, load_reports,
};
pub use output::{OutputTarget, auto_detect_format, should_use_color, write_output};
pub use report_stage::{OutputOptions, output_assessment, output_portfolio};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an input file
    #[error("Input failed for {path}: {source}")]
    InputFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Assessment could not be completed or persisted
    #[error("Assessment failed: {source}")]
    AssessmentFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Score is below the configured `--min-score`
    pub const BELOW_THRESHOLD: i32 = 1;
    /// Organization registration has field violations
    pub const VALIDATION_FAILED: i32 = 1;
    /// Organization is non-compliant and `--fail-on-non-compliant` is set
    pub const NON_COMPLIANT: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
