//! Report output stage.

use crate::model::ComplianceReport;
use crate::portfolio::PortfolioSummary;
use crate::reports::{ReportConfig, ReportFormat, create_reporter_with_options};
use anyhow::Result;
use std::path::PathBuf;

use super::{OutputTarget, auto_detect_format, should_use_color, write_output};

/// Where and how to render a report.
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub format: ReportFormat,
    pub file: Option<PathBuf>,
    pub no_color: bool,
    pub quiet: bool,
}

/// Render a compliance report and write it to the configured destination.
pub fn output_assessment(
    report: &ComplianceReport,
    report_config: &ReportConfig,
    options: &OutputOptions,
) -> Result<()> {
    let target = OutputTarget::from_option(options.file.clone());
    let format = auto_detect_format(options.format, &target);
    let reporter = create_reporter_with_options(format, should_use_color(options.no_color, &target));
    let rendered = reporter.generate_assessment_report(report, report_config)?;
    write_output(&rendered, &target, options.quiet)
}

/// Render a portfolio overview and write it to the configured destination.
pub fn output_portfolio(summary: &PortfolioSummary, options: &OutputOptions) -> Result<()> {
    let target = OutputTarget::from_option(options.file.clone());
    let format = auto_detect_format(options.format, &target);
    let reporter = create_reporter_with_options(format, should_use_color(options.no_color, &target));
    let rendered = reporter.generate_portfolio_report(summary)?;
    write_output(&rendered, &target, options.quiet)
}
