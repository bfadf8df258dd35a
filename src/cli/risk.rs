//! Risk command handler.
//!
//! Implements the `risk` subcommand: classify a compliance percentage and
//! compute the composite risk index.

use crate::model::DataVolume;
use crate::pipeline::{
    OutputTarget, auto_detect_format, exit_codes, should_use_color, write_output,
};
use crate::reports::{ReportFormat, ansi_color, risk_color, status_color};
use crate::scoring::{ComplianceStatus, RiskClassifier, RiskIndex, RiskLevel};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Risk command configuration
#[derive(Debug, Clone)]
pub struct RiskConfig {
    pub score: f64,
    pub sdf_score: u32,
    /// Raw data volume code; unrecognized codes score as unknown
    pub data_volume: Option<String>,
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
}

#[derive(Serialize)]
struct RiskOutput {
    score: f64,
    status: ComplianceStatus,
    risk: RiskLevel,
    risk_index: RiskIndex,
}

/// Run the risk command.
pub fn run_risk(config: RiskConfig) -> Result<i32> {
    let (status, risk) = RiskClassifier::new().classify(config.score);

    let volume = config.data_volume.as_deref().and_then(|code| {
        let parsed = DataVolume::from_code(code);
        if parsed.is_none() {
            tracing::warn!("Unrecognized data volume '{code}', scoring as unknown");
        }
        parsed
    });
    let output = RiskOutput {
        score: config.score,
        status,
        risk,
        risk_index: RiskIndex::compute(config.score, config.sdf_score, volume),
    };

    let target = OutputTarget::from_option(config.output_file);
    let content = match auto_detect_format(config.format, &target) {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&output).context("Failed to serialize risk result")?
        }
        _ => format_risk_text(&output, should_use_color(config.no_color, &target)),
    };
    write_output(&content, &target, false)?;

    Ok(exit_codes::SUCCESS)
}

fn format_risk_text(output: &RiskOutput, colored: bool) -> String {
    let index = &output.risk_index;
    [
        ansi_color("Risk Classification", "bold", colored),
        String::new(),
        format!("  Score:      {:.2}%", output.score),
        format!(
            "  Status:     {}",
            ansi_color(output.status.name(), status_color(output.status), colored)
        ),
        format!(
            "  Risk level: {}",
            ansi_color(output.risk.name(), risk_color(output.risk), colored)
        ),
        String::new(),
        format!("  Risk index: {}/100", index.total),
        format!("    assessment  {:>3}", index.assessment_points),
        format!("    sdf         {:>3}", index.sdf_points),
        format!("    data volume {:>3}", index.volume_points),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(score: f64, out: PathBuf) -> RiskConfig {
        RiskConfig {
            score,
            sdf_score: 8,
            data_volume: Some("10k_to_100k".to_string()),
            format: ReportFormat::Json,
            output_file: Some(out),
            no_color: true,
        }
    }

    #[test]
    fn test_risk_json() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("risk.json");
        run_risk(config(79.99, out.clone())).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["status"], "Partially Compliant");
        assert_eq!(value["risk"], "Medium");
        assert_eq!(value["risk_index"]["total"], 30 + 15 + 8);
    }

    #[test]
    fn test_unknown_volume_scores_five() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("risk.json");
        let mut cfg = config(95.0, out.clone());
        cfg.data_volume = Some("lots".to_string());
        run_risk(cfg).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["risk_index"]["volume_points"], 5);
        assert_eq!(value["status"], "Fully Compliant");
    }

    #[test]
    fn test_risk_text() {
        let output = RiskOutput {
            score: 49.99,
            status: ComplianceStatus::NonCompliant,
            risk: RiskLevel::High,
            risk_index: RiskIndex::compute(49.99, 0, None),
        };
        let text = format_risk_text(&output, false);
        assert!(text.contains("Score:      49.99%"));
        assert!(text.contains("Status:     Non-Compliant"));
        assert!(text.contains("Risk index: 70/100"));
    }
}
