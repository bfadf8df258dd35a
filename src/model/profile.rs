//! Organization data-processing profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Data type tag that marks processing of children's personal data.
pub const CHILDREN_DATA_TAG: &str = "Children Data";

/// Profile attributes as submitted by an organization.
///
/// Bucket fields keep the raw submitted code so that unrecognized values
/// survive a round trip; typed views are available through
/// [`ProfileAttributes::data_volume`] and [`ProfileAttributes::employee_band`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileAttributes {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub business_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub employee_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub data_volume: Option<String>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub data_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub sensitive_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub data_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub third_party_sharing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub cross_border_transfer: Option<String>,
}

impl ProfileAttributes {
    /// Typed data volume bucket, `None` when missing or unrecognized.
    #[must_use]
    pub fn data_volume(&self) -> Option<DataVolume> {
        self.data_volume.as_deref().and_then(DataVolume::from_code)
    }

    /// Typed employee band, `None` when missing or outside the scored bands.
    #[must_use]
    pub fn employee_band(&self) -> Option<EmployeeBand> {
        self.employee_count.as_deref().and_then(EmployeeBand::from_code)
    }

    #[must_use]
    pub fn processes_sensitive_data(&self) -> bool {
        is_yes(self.sensitive_data.as_deref())
    }

    #[must_use]
    pub fn transfers_cross_border(&self) -> bool {
        is_yes(self.cross_border_transfer.as_deref())
    }

    #[must_use]
    pub fn shares_with_third_parties(&self) -> bool {
        is_yes(self.third_party_sharing.as_deref())
    }

    #[must_use]
    pub fn processes_children_data(&self) -> bool {
        self.data_types.iter().any(|t| t == CHILDREN_DATA_TAG)
    }
}

/// Yes/No fields count only on the exact literal `"Yes"`.
fn is_yes(value: Option<&str>) -> bool {
    value == Some("Yes")
}

/// Volume of personal data records processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataVolume {
    #[serde(rename = "less_than_1k")]
    LessThan1k,
    #[serde(rename = "1k_to_10k")]
    From1kTo10k,
    #[serde(rename = "10k_to_100k")]
    From10kTo100k,
    #[serde(rename = "100k_to_1_million")]
    From100kTo1Million,
    #[serde(rename = "more_than_1_million")]
    MoreThan1Million,
}

impl DataVolume {
    /// Parse a submitted bucket code. Codes are matched exactly.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "less_than_1k" => Some(Self::LessThan1k),
            "1k_to_10k" => Some(Self::From1kTo10k),
            "10k_to_100k" => Some(Self::From10kTo100k),
            "100k_to_1_million" => Some(Self::From100kTo1Million),
            "more_than_1_million" => Some(Self::MoreThan1Million),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::LessThan1k => "less_than_1k",
            Self::From1kTo10k => "1k_to_10k",
            Self::From10kTo100k => "10k_to_100k",
            Self::From100kTo1Million => "100k_to_1_million",
            Self::MoreThan1Million => "more_than_1_million",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LessThan1k => "Less than 1,000 records",
            Self::From1kTo10k => "1,000 - 10,000 records",
            Self::From10kTo100k => "10,000 - 100,000 records",
            Self::From100kTo1Million => "100,000 - 1 million records",
            Self::MoreThan1Million => "More than 1 million records",
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::LessThan1k,
            Self::From1kTo10k,
            Self::From10kTo100k,
            Self::From100kTo1Million,
            Self::MoreThan1Million,
        ]
    }
}

/// Employee head-count bands that carry SDF weight.
///
/// Smaller organizations submit other codes, which are kept verbatim in
/// [`ProfileAttributes::employee_count`] and contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmployeeBand {
    #[serde(rename = "100_to_500")]
    From100To500,
    #[serde(rename = "more_than_500")]
    MoreThan500,
}

impl EmployeeBand {
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "100_to_500" => Some(Self::From100To500),
            "more_than_500" => Some(Self::MoreThan500),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::From100To500 => "100_to_500",
            Self::MoreThan500 => "more_than_500",
        }
    }
}

/// Stored profile: submitted attributes plus the derived SDF classification.
///
/// At most one live record exists per organization; later submissions
/// replace it while keeping `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub org_id: String,
    #[serde(flatten)]
    pub attributes: ProfileAttributes,
    pub sdf_score: u32,
    pub is_sdf: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Keep string values; any other JSON type reads as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accept `null`, a single string, or a list (non-string entries dropped).
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => vec![s],
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
