//! Configuration presets for dpdp-assess.

use super::types::{AppConfig, BehaviorConfig, CatalogConfig, OutputConfig};
use crate::reports::ReportFormat;
use crate::scoring::FULLY_COMPLIANT_THRESHOLD;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Human-readable output, never fails on score
    Default,
    /// CI/CD: JSON output, quiet, fail when non-compliant
    CiCd,
    /// Strict: require a fully compliant score
    Strict,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Colored summary output with no failing exit codes",
            Self::CiCd => "Quiet JSON output that fails on Non-Compliant results",
            Self::Strict => "Fails unless the organization is Fully Compliant",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Strict]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl AppConfig {
    /// Create a configuration from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self {
                output: OutputConfig {
                    format: ReportFormat::Json,
                    file: None,
                    no_color: true,
                },
                behavior: BehaviorConfig {
                    min_score: None,
                    fail_on_non_compliant: true,
                    quiet: true,
                },
                catalog: CatalogConfig::default(),
            },
            ConfigPreset::Strict => Self {
                behavior: BehaviorConfig {
                    min_score: Some(FULLY_COMPLIANT_THRESHOLD),
                    fail_on_non_compliant: true,
                    quiet: false,
                },
                ..Self::default()
            },
        }
    }
}
