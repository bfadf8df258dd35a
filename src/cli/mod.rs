//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod assess;
mod catalog;
mod certificate;
mod organization;
mod overview;
mod risk;
mod sdf;

pub use assess::{AssessConfig, run_assess};
pub use catalog::run_catalog;
pub use certificate::run_certificate;
pub use organization::run_validate_org;
pub use overview::run_overview;
pub use risk::{RiskConfig, run_risk};
pub use sdf::run_sdf;
