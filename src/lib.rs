//! **A scoring engine for Digital Personal Data Protection (DPDP) Act self-assessments.**
//!
//! `dpdp-assess` turns an organization's data-processing profile and its
//! answers to a compliance questionnaire into a weighted compliance score,
//! a status and risk level, a Significant Data Fiduciary (SDF)
//! classification and a prioritized list of remediation actions. It powers
//! both a command-line interface and a Rust library for embedding the
//! engine in other services.
//!
//! ## Key Features
//!
//! - **SDF Classification**: additive significance score from data volume,
//!   headcount, sensitive and children's data, and cross-border transfers.
//! - **Weighted Scoring**: per-category and overall percentages over a
//!   25-question catalog; `Partial` answers earn half credit.
//! - **Risk Classification**: Fully / Partially / Non-Compliant with a paired
//!   Low / Medium / High risk level.
//! - **Remediation Ranking**: up to ten recommendations, High priority for
//!   unanswered questions, Medium for partially met ones.
//! - **Beyond the score**: composite risk index, compliance certificates,
//!   registration validation and a portfolio overview for administrators.
//!
//! ## Core Concepts & Modules
//!
//! - **[`catalog`]**: the validated question catalog, built-in or loaded from a file.
//! - **[`model`]**: profiles, answers, organizations and the stored records.
//! - **[`scoring`]**: the four pure scoring components plus the risk index and
//!   certificate rules.
//! - **[`pipeline`]**: load → assess → report, persisting through an
//!   [`AssessmentStore`].
//! - **[`portfolio`]**: the administrator's overview across many reports.
//! - **[`reports`]**: summary, JSON and table renderers.
//!
//! ## Getting Started
//!
//! ```
//! use dpdp_assess::{Answer, AnswerSet, classify_risk, rank_recommendations, score_assessment};
//!
//! let answers = AnswerSet::new()
//!     .with("q1", Answer::Yes)
//!     .with("q2", Answer::Partial)
//!     .with("q3", Answer::No);
//!
//! let result = score_assessment(&answers);
//! assert_eq!(result.percentage, 6.54);
//!
//! let (status, risk) = classify_risk(result.percentage);
//! println!("{status} ({risk} risk)");
//!
//! let recommendations = rank_recommendations(&answers);
//! assert_eq!(recommendations.len(), 10);
//! ```
//!
//! ### Persisting an Assessment
//!
//! ```no_run
//! use chrono::Utc;
//! use dpdp_assess::{MemoryStore, OrganizationRef, QuestionCatalog};
//! use dpdp_assess::pipeline::{assess_organization, load_answers};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::new();
//!     let answers = load_answers(Path::new("answers.json"))?;
//!     let org = OrganizationRef::new("org-42", "Acme Pvt Ltd");
//!
//!     let submitted =
//!         assess_organization(&store, &org, &answers, QuestionCatalog::dpdp(), Utc::now())?;
//!     println!("{}: {:.2}%", submitted.report.status, submitted.report.score);
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `dpdp-assess` library crate. The binary of the
//! same name wraps it; run `dpdp-assess --help` for the available commands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Counts and weights are small; usize/u32 to f64 conversions are exact
    clippy::cast_precision_loss,
    // Doc completeness: # Errors sections are not written for every fallible fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `earned`/`possible` are clear in context
    clippy::similar_names
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod portfolio;
pub mod reports;
pub mod scoring;
pub mod store;

// Re-export main types for convenience
pub use catalog::{QuestionCatalog, QuestionDefinition};
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, CatalogConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{AssessError, ErrorContext, OptionContext, Result};
pub use model::{
    Answer, AnswerSet, AssessmentRecord, ComplianceReport, Organization, OrganizationRef,
    ProfileAttributes, ProfileRecord,
};
pub use portfolio::PortfolioSummary;
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{
    CertificateOutcome, ComplianceScorer, ComplianceStatus, Priority, Recommendation,
    RecommendationRanker, RiskClassifier, RiskIndex, RiskLevel, ScoreResult, SdfClassification,
    SdfClassifier, classify_risk, classify_sdf, rank_recommendations, score_assessment,
};
pub use store::{AssessmentStore, MemoryStore};
