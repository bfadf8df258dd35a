//! Catalog command handler.
//!
//! Implements the `catalog` subcommand: list the questionnaire the scorer
//! runs against, either the built-in DPDP catalog or a custom file.

use crate::catalog::{QuestionCatalog, QuestionDefinition};
use crate::pipeline::{
    OutputTarget, auto_detect_format, exit_codes, should_use_color, write_output,
};
use crate::reports::{ReportFormat, ansi_color};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct CatalogOutput<'a> {
    total_questions: usize,
    total_weight: f64,
    categories: Vec<&'a str>,
    questions: Vec<&'a QuestionDefinition>,
}

/// Run the catalog command.
pub fn run_catalog(
    catalog: &QuestionCatalog,
    category: Option<&str>,
    format: ReportFormat,
    output_file: Option<PathBuf>,
    no_color: bool,
) -> Result<i32> {
    let questions: Vec<&QuestionDefinition> = match category {
        Some(wanted) => {
            let selected: Vec<_> = catalog
                .iter()
                .filter(|q| q.category.eq_ignore_ascii_case(wanted))
                .collect();
            if selected.is_empty() {
                bail!(
                    "Unknown category: {wanted}. Valid options: {}",
                    catalog.categories().join(", ")
                );
            }
            selected
        }
        None => catalog.iter().collect(),
    };

    let output = CatalogOutput {
        total_questions: catalog.len(),
        total_weight: catalog.total_weight(),
        categories: catalog.categories(),
        questions,
    };

    let target = OutputTarget::from_option(output_file);
    let content = match auto_detect_format(format, &target) {
        ReportFormat::Json => {
            serde_json::to_string_pretty(&output).context("Failed to serialize catalog")?
        }
        _ => format_catalog_text(&output, should_use_color(no_color, &target)),
    };
    write_output(&content, &target, false)?;

    Ok(exit_codes::SUCCESS)
}

fn format_catalog_text(output: &CatalogOutput<'_>, colored: bool) -> String {
    let mut lines = vec![ansi_color(
        &format!(
            "Question Catalog ({} questions, total weight {})",
            output.total_questions, output.total_weight
        ),
        "bold",
        colored,
    )];

    let mut current: Option<&str> = None;
    for question in &output.questions {
        if current != Some(question.category.as_str()) {
            current = Some(question.category.as_str());
            lines.push(String::new());
            lines.push(ansi_color(&question.category, "cyan", colored));
        }
        lines.push(format!(
            "  {:<4} {:>4}  {}",
            question.id, question.weight, question.recommendation
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_text_groups_by_category() {
        let catalog = QuestionCatalog::dpdp();
        let output = CatalogOutput {
            total_questions: catalog.len(),
            total_weight: catalog.total_weight(),
            categories: catalog.categories(),
            questions: catalog.iter().collect(),
        };
        let text = format_catalog_text(&output, false);

        assert!(text.starts_with("Question Catalog (25 questions, total weight 107)"));
        assert_eq!(text.matches("\nConsent Management\n").count(), 1);
        assert!(text.contains("  q1      5  Implement explicit consent mechanism"));
    }

    #[test]
    fn test_category_filter() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("catalog.json");
        run_catalog(
            QuestionCatalog::dpdp(),
            Some("consent management"),
            ReportFormat::Json,
            Some(out.clone()),
            true,
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        let ids: Vec<&str> = value["questions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.first(), Some(&"q1"));
        assert!(value["questions"]
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["category"] == "Consent Management"));
    }

    #[test]
    fn test_unknown_category() {
        let err = run_catalog(
            QuestionCatalog::dpdp(),
            Some("Astrology"),
            ReportFormat::Json,
            None,
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown category: Astrology"));
    }
}
