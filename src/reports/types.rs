//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scoring::RiskIndex;

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: colored summary on a terminal, plain summary otherwise
    #[default]
    Auto,
    /// Human-readable summary
    Summary,
    /// Structured JSON output
    Json,
    /// Aligned tabular terminal output
    Table,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// Extra context rendered alongside a compliance report
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Title override for the report header
    pub title: Option<String>,
    /// Include the per-category breakdown
    pub include_categories: bool,
    /// Composite risk index, when the profile is known
    pub risk_index: Option<RiskIndex>,
}

impl ReportConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_categories: true,
            ..Self::default()
        }
    }
}
