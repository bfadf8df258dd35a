//! Validate-org command handler.
//!
//! Implements the `validate-org` subcommand for checking registration
//! details (email, Indian phone number, GSTIN).

use crate::model::{Organization, RegistrationViolation};
use crate::pipeline::{
    OutputTarget, PipelineError, auto_detect_format, exit_codes, load_organization,
    should_use_color, write_output,
};
use crate::reports::{ReportFormat, ansi_color};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct ValidationOutput<'a> {
    organization_name: &'a str,
    valid: bool,
    violations: &'a [RegistrationViolation],
}

/// Run the validate-org command, returning the desired exit code.
pub fn run_validate_org(
    organization_path: PathBuf,
    format: ReportFormat,
    output_file: Option<PathBuf>,
    no_color: bool,
) -> Result<i32> {
    let organization =
        load_organization(&organization_path).map_err(|source| PipelineError::InputFailed {
            path: organization_path.display().to_string(),
            source,
        })?;
    let violations = organization.validate();
    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "Registration violations found");
    }

    let target = OutputTarget::from_option(output_file);
    let content = match auto_detect_format(format, &target) {
        ReportFormat::Json => serde_json::to_string_pretty(&ValidationOutput {
            organization_name: &organization.organization_name,
            valid: violations.is_empty(),
            violations: &violations,
        })
        .context("Failed to serialize validation result")?,
        _ => format_validation_text(
            &organization,
            &violations,
            should_use_color(no_color, &target),
        ),
    };
    write_output(&content, &target, false)?;

    if violations.is_empty() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::VALIDATION_FAILED)
    }
}

fn format_validation_text(
    organization: &Organization,
    violations: &[RegistrationViolation],
    colored: bool,
) -> String {
    let name = if organization.organization_name.is_empty() {
        "(unnamed organization)"
    } else {
        organization.organization_name.as_str()
    };
    let mut lines = vec![ansi_color(name, "bold", colored)];

    if violations.is_empty() {
        lines.push(format!(
            "  {}",
            ansi_color("Registration details are valid", "green", colored)
        ));
        return lines.join("\n");
    }

    lines.push(format!(
        "  {}",
        ansi_color(
            &format!("{} problem(s) found", violations.len()),
            "red",
            colored
        )
    ));
    lines.extend(violations.iter().map(|violation| format!("  - {violation}")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_org(json: &str) -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("org.json");
        std::fs::write(&path, json).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_valid_registration() {
        let (tmp, path) = write_org(
            r#"{"organizationName": "Acme Pvt Ltd", "email": "dpo@acme.in",
                "phone": "+91 9876543210", "gstin": "27AAPFU0939F1ZV"}"#,
        );
        let out = tmp.path().join("result.json");
        let code = run_validate_org(path, ReportFormat::Json, Some(out.clone()), true).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["valid"], true);
    }

    #[test]
    fn test_invalid_registration() {
        let (tmp, path) =
            write_org(r#"{"organizationName": "Acme", "email": "nope", "phone": "12345"}"#);
        let out = tmp.path().join("result.txt");
        let code =
            run_validate_org(path, ReportFormat::Summary, Some(out.clone()), true).unwrap();
        assert_eq!(code, exit_codes::VALIDATION_FAILED);

        let text = std::fs::read_to_string(out).unwrap();
        assert!(text.contains("3 problem(s) found"));
        assert!(text.contains("- gstin: gstin is required"));
        assert!(text.contains("- email: 'nope' is not a valid email address"));
    }
}
