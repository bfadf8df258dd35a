//! Configuration module for dpdp-assess.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dpdp_assess::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::from_preset(ConfigPreset::CiCd);
//!
//! let config = AppConfig::builder()
//!     .min_score(Some(80.0))
//!     .fail_on_non_compliant(true)
//!     .build();
//!
//! use dpdp_assess::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.dpdp-assess.yaml` file in your project root or `~/.config/dpdp-assess/`:
//!
//! ```yaml
//! output:
//!   format: json
//! behavior:
//!   min_score: 80
//!   fail_on_non_compliant: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{AppConfig, AppConfigBuilder, BehaviorConfig, CatalogConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    ConfigFileError, discover_config_file, generate_example_config, generate_full_example_config,
    load_config_file, load_or_default, user_config_dir,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option accepted in `.dpdp-assess.yaml` and
/// can be used by editors for validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
