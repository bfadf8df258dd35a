//! Summary and table report generators for shell output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::ComplianceReport;
use crate::portfolio::{NOT_ASSESSED, PortfolioSummary};
use crate::scoring::{ComplianceStatus, Priority, RiskLevel};

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

pub(crate) const fn status_color(status: ComplianceStatus) -> &'static str {
    match status {
        ComplianceStatus::FullyCompliant => "green",
        ComplianceStatus::PartiallyCompliant => "yellow",
        ComplianceStatus::NonCompliant => "red",
    }
}

pub(crate) const fn risk_color(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "green",
        RiskLevel::Medium => "yellow",
        RiskLevel::High => "red",
    }
}

const fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "red",
        Priority::Medium => "yellow",
        Priority::Low => "dim",
    }
}

fn status_name_color(status: &str) -> &'static str {
    match status {
        "Fully Compliant" => "green",
        "Partially Compliant" => "yellow",
        "Non-Compliant" => "red",
        _ => "dim",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_assessment_report(
        &self,
        report: &ComplianceReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        let title = config
            .title
            .clone()
            .unwrap_or_else(|| "DPDP Compliance Report".to_string());
        lines.push(self.color(&title, "bold"));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));

        lines.push(format!(
            "{}  {}",
            self.color("Organization:", "cyan"),
            report.organization_name
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Date:", "cyan"),
            report.report_date.format("%Y-%m-%d %H:%M UTC")
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Score:", "cyan"),
            self.color(&format!("{:.2}%", report.score), "bold")
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Status:", "cyan"),
            self.color(report.status.name(), status_color(report.status))
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Risk:", "cyan"),
            self.color(report.risk.name(), risk_color(report.risk))
        ));
        lines.push(format!(
            "{}  {} (score {})",
            self.color("SDF:", "cyan"),
            if report.is_sdf {
                "Significant Data Fiduciary"
            } else {
                "Data Fiduciary"
            },
            report.sdf_score
        ));
        if let Some(index) = &config.risk_index {
            lines.push(format!(
                "{}  {}/100",
                self.color("Risk index:", "cyan"),
                index.total
            ));
        }

        if config.include_categories && !report.category_scores.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Categories:", "bold"));
            for (name, score) in &report.category_scores {
                let pct = format!("{:>6.1}%", score.percentage);
                let color = if score.percentage >= 80.0 {
                    "green"
                } else if score.percentage >= 50.0 {
                    "yellow"
                } else {
                    "red"
                };
                lines.push(format!("  {:<24} {}", name, self.color(&pct, color)));
            }
        }

        lines.push(String::new());
        if report.recommendations.is_empty() {
            lines.push(self.color("No outstanding recommendations", "green"));
        } else {
            lines.push(self.color("Recommendations:", "bold"));
            for (idx, rec) in report.recommendations.iter().enumerate() {
                lines.push(format!(
                    "  {:>2}. [{}] {} {}",
                    idx + 1,
                    self.color(rec.priority.name(), priority_color(rec.priority)),
                    rec.action,
                    self.color(&format!("({})", rec.category), "dim")
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn generate_portfolio_report(
        &self,
        summary: &PortfolioSummary,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("DPDP Compliance Summary", "bold"));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("Organizations:", "cyan"),
            summary.total_organizations
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Assessments:", "cyan"),
            summary.total_assessments
        ));
        lines.push(format!(
            "{}  {:.2}%",
            self.color("Average score:", "cyan"),
            summary.average_score
        ));

        lines.push(String::new());
        lines.push(self.color("Status breakdown:", "bold"));
        if summary.total_assessments == 0 {
            lines.push(format!("  {}", self.color("No assessments", "dim")));
        } else {
            for entry in &summary.status_breakdown {
                lines.push(format!(
                    "  {:<20} {} ({:.1}%)",
                    self.color(entry.status.name(), status_color(entry.status)),
                    entry.count,
                    entry.percentage
                ));
            }
        }

        lines.push(String::new());
        lines.push(self.color("Entity classification:", "bold"));
        lines.push(format!(
            "  Significant Data Fiduciaries: {}",
            summary.sdf_organizations
        ));
        lines.push(format!(
            "  Regular Data Fiduciaries:     {}",
            summary.regular_organizations
        ));

        if !summary.recent.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Recent assessments:", "bold"));
            for (idx, recent) in summary.recent.iter().enumerate() {
                lines.push(format!(
                    "  {}. {} - {:.1}% - {}",
                    idx + 1,
                    recent.organization_name,
                    recent.score,
                    self.color(recent.status.name(), status_color(recent.status))
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for aligned terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_assessment_report(
        &self,
        report: &ComplianceReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} {} {} {}",
            self.color(&format!("{:<24}", "CATEGORY"), "bold"),
            self.color(&format!("{:>8}", "EARNED"), "bold"),
            self.color(&format!("{:>9}", "POSSIBLE"), "bold"),
            self.color(&format!("{:>8}", "PERCENT"), "bold"),
        ));
        lines.push("─".repeat(52));
        for (name, score) in &report.category_scores {
            lines.push(format!(
                "{:<24} {:>8.1} {:>9.1} {:>7.1}%",
                truncate(name, 24),
                score.earned,
                score.possible,
                score.percentage
            ));
        }
        lines.push("─".repeat(52));
        lines.push(format!(
            "{:<24} {:>28}",
            self.color("OVERALL", "bold"),
            self.color(
                &format!("{:.2}%", report.score),
                status_color(report.status)
            )
        ));

        Ok(lines.join("\n"))
    }

    fn generate_portfolio_report(
        &self,
        summary: &PortfolioSummary,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} {} {} {} {}",
            self.color(&format!("{:<32}", "ORGANIZATION"), "bold"),
            self.color(&format!("{:>8}", "SCORE"), "bold"),
            self.color(&format!("{:<20}", "STATUS"), "bold"),
            self.color(&format!("{:<4}", "SDF"), "bold"),
            self.color("LAST ASSESSED", "bold"),
        ));
        lines.push("─".repeat(82));

        for org in &summary.organizations {
            let score = org
                .latest_score
                .map_or_else(|| "-".to_string(), |s| format!("{s:.2}"));
            let last = org
                .last_assessment
                .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());
            let status = if org.status == NOT_ASSESSED {
                self.color(&format!("{:<20}", org.status), "dim")
            } else {
                self.color(&format!("{:<20}", org.status), status_name_color(&org.status))
            };
            lines.push(format!(
                "{:<32} {:>8} {} {:<4} {}",
                truncate(&org.organization_name, 32),
                score,
                status,
                if org.is_sdf { "yes" } else { "no" },
                last
            ));
        }

        if summary.organizations.is_empty() {
            lines.push(self.color("No organizations", "dim"));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Truncate to `max` characters, marking the cut with an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
