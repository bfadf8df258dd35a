//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::ComplianceReport;
use crate::portfolio::PortfolioSummary;
use crate::scoring::RiskIndex;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }?;
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_assessment_report(
        &self,
        report: &ComplianceReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonAssessmentReport {
            metadata: JsonReportMetadata::now(),
            risk_index: config.risk_index,
            report,
        })
    }

    fn generate_portfolio_report(
        &self,
        summary: &PortfolioSummary,
    ) -> Result<String, ReportError> {
        self.render(&JsonPortfolioReport {
            metadata: JsonReportMetadata::now(),
            summary,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

impl JsonReportMetadata {
    fn now() -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct JsonAssessmentReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    risk_index: Option<RiskIndex>,
    report: &'a ComplianceReport,
}

#[derive(Serialize)]
struct JsonPortfolioReport<'a> {
    metadata: JsonReportMetadata,
    summary: &'a PortfolioSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioSummary;

    #[test]
    fn test_portfolio_json_shape() {
        let summary = PortfolioSummary::from_reports(&[], &[]);
        let json = JsonReporter::new().generate_portfolio_report(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], "dpdp-assess");
        assert_eq!(value["summary"]["total_assessments"], 0);
        assert_eq!(
            value["summary"]["status_breakdown"][0]["status"],
            "Fully Compliant"
        );
    }

    #[test]
    fn test_compact_output() {
        let summary = PortfolioSummary::from_reports(&[], &[]);
        let json = JsonReporter::new()
            .pretty(false)
            .generate_portfolio_report(&summary)
            .unwrap();
        assert!(!json.contains('\n'));
    }
}
