//! SDF command handler.
//!
//! Implements the `sdf` subcommand: classify an organization profile as a
//! Significant Data Fiduciary and show the contributing factors.

use crate::model::ProfileAttributes;
use crate::pipeline::{
    OutputTarget, PipelineError, auto_detect_format, exit_codes, load_profile, should_use_color,
    write_output,
};
use crate::reports::{ReportFormat, ansi_color};
use crate::scoring::{SDF_THRESHOLD, SdfClassification, SdfClassifier, SdfFactor};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct SdfOutput<'a> {
    #[serde(flatten)]
    classification: SdfClassification,
    threshold: u32,
    factors: &'a [SdfFactor],
}

/// Run the sdf command.
pub fn run_sdf(
    profile_path: PathBuf,
    format: ReportFormat,
    output_file: Option<PathBuf>,
    no_color: bool,
) -> Result<i32> {
    let profile = load_profile(&profile_path).map_err(|source| PipelineError::InputFailed {
        path: profile_path.display().to_string(),
        source,
    })?;

    let classifier = SdfClassifier::new();
    let classification = classifier.classify(&profile);
    let factors = classifier.factors(&profile);
    tracing::debug!(
        score = classification.score,
        is_sdf = classification.is_sdf,
        "Classified profile"
    );

    let target = OutputTarget::from_option(output_file);
    let content = match auto_detect_format(format, &target) {
        ReportFormat::Json => serde_json::to_string_pretty(&SdfOutput {
            classification,
            threshold: SDF_THRESHOLD,
            factors: &factors,
        })
        .context("Failed to serialize SDF classification")?,
        _ => format_sdf_text(
            &profile,
            classification,
            &factors,
            should_use_color(no_color, &target),
        ),
    };
    write_output(&content, &target, false)?;

    Ok(exit_codes::SUCCESS)
}

fn format_sdf_text(
    profile: &ProfileAttributes,
    classification: SdfClassification,
    factors: &[SdfFactor],
    colored: bool,
) -> String {
    let mut lines = vec![
        ansi_color("SDF Classification", "bold", colored),
        String::new(),
    ];

    let verdict = if classification.is_sdf {
        ansi_color("Significant Data Fiduciary", "red", colored)
    } else {
        ansi_color("Regular Data Fiduciary", "green", colored)
    };
    lines.push(format!("  Classification: {verdict}"));
    lines.push(format!(
        "  Score:          {} (threshold {SDF_THRESHOLD})",
        classification.score
    ));
    if let Some(business_type) = &profile.business_type {
        lines.push(format!("  Business type:  {business_type}"));
    }

    lines.push(String::new());
    if factors.is_empty() {
        lines.push(format!(
            "  {}",
            ansi_color("No contributing factors", "dim", colored)
        ));
    } else {
        lines.push("  Contributing factors:".to_string());
        for factor in factors {
            lines.push(format!("    +{:<2} {}", factor.points, factor.factor));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdf_text_lists_factors() {
        let profile: ProfileAttributes = serde_json::from_str(
            r#"{"businessType": "Fintech", "dataVolume": "100k_to_1_million",
                "dataTypes": ["Children Data"], "sensitiveData": "Yes"}"#,
        )
        .unwrap();
        let classifier = SdfClassifier::new();
        let text = format_sdf_text(
            &profile,
            classifier.classify(&profile),
            &classifier.factors(&profile),
            false,
        );

        assert!(text.contains("Significant Data Fiduciary"));
        assert!(text.contains("Score:          12 (threshold 10)"));
        assert!(text.contains("+5  Children's data"));
        assert!(text.contains("Business type:  Fintech"));
    }

    #[test]
    fn test_sdf_json_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let profile = tmp.path().join("profile.json");
        std::fs::write(&profile, "{}").unwrap();
        let out = tmp.path().join("sdf.json");

        let code = run_sdf(profile, ReportFormat::Auto, Some(out.clone()), true).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["score"], 0);
        assert_eq!(value["is_sdf"], false);
        assert_eq!(value["threshold"], 10);
        assert_eq!(value["factors"].as_array().unwrap().len(), 0);
    }
}
