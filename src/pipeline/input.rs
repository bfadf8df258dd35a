//! Input loading for profiles, answers, organizations and stored reports.
//!
//! Files ending in `.yaml`/`.yml` are read as YAML, everything else as
//! JSON. Answer files may be either a bare `{id: answer}` map or a form
//! submission wrapping it as `{"answers": {...}}`.

use crate::error::{AssessError, InputErrorKind};
use crate::model::{AnswerSet, ComplianceReport, Organization, ProfileAttributes};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Read and deserialize a JSON or YAML document.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    parse_document(&content, is_yaml(path))
        .with_context(|| format!("Failed to parse input file: {}", path.display()))
}

fn parse_document<T: DeserializeOwned>(content: &str, yaml: bool) -> Result<T> {
    let value: serde_json::Value = if yaml {
        serde_yaml_ng::from_str(content).map_err(AssessError::from)?
    } else {
        serde_json::from_str(content).map_err(AssessError::from)?
    };
    Ok(serde_json::from_value(value).map_err(AssessError::from)?)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Load a questionnaire submission.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let value: serde_json::Value = load_document(path)?;
    answers_from_value(value)
        .with_context(|| format!("Invalid answers in {}", path.display()))
}

fn answers_from_value(value: serde_json::Value) -> Result<AnswerSet> {
    let inner = match value {
        serde_json::Value::Object(mut map) => match map.remove("answers") {
            Some(nested @ serde_json::Value::Object(_)) => nested,
            Some(other) => {
                map.insert("answers".to_string(), other);
                serde_json::Value::Object(map)
            }
            None => serde_json::Value::Object(map),
        },
        other => {
            return Err(AssessError::input(
                "reading answers",
                InputErrorKind::NotAnObject {
                    found: json_kind(&other).to_string(),
                },
            )
            .into());
        }
    };
    Ok(serde_json::from_value(inner).map_err(AssessError::from)?)
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Load profile attributes. Missing fields default to absent.
pub fn load_profile(path: &Path) -> Result<ProfileAttributes> {
    load_document(path)
}

/// Load an organization registration.
pub fn load_organization(path: &Path) -> Result<Organization> {
    load_document(path)
}

/// Load stored compliance reports from files in parallel.
///
/// Each file holds either one report or an array of reports. Results keep
/// the order of `paths`.
pub fn load_reports(paths: &[PathBuf]) -> Result<Vec<ComplianceReport>> {
    let batches: Vec<Vec<ComplianceReport>> = paths
        .par_iter()
        .map(|path| load_report_file(path))
        .collect::<Result<_>>()?;
    Ok(batches.into_iter().flatten().collect())
}

fn load_report_file(path: &Path) -> Result<Vec<ComplianceReport>> {
    let value: serde_json::Value = load_document(path)?;
    let reports = if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value(value).map(|report| vec![report])
    };
    reports.with_context(|| format!("Invalid compliance report in {}", path.display()))
}
