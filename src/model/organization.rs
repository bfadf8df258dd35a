//! Registered organizations and registration-field validation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?91[-\s]?[6-9]\d{9}$").expect("valid phone regex"));

static GSTIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[1-9A-Z]{1}Z[0-9A-Z]{1}$")
        .expect("valid GSTIN regex")
});

/// Role of a registered account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationRole {
    #[default]
    Organization,
    Admin,
}

/// A registered data fiduciary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Organization {
    pub organization_name: String,
    pub email: String,
    pub phone: String,
    pub gstin: String,
    pub role: OrganizationRole,
}

/// A single failed registration check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationViolation {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for RegistrationViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Organization {
    /// Validate registration fields, returning every violation found.
    ///
    /// Format checks run only on fields that are present, so an empty or blank field
    /// yields a single "required" violation.
    #[must_use]
    pub fn validate(&self) -> Vec<RegistrationViolation> {
        let mut violations = Vec::new();

        let required = [
            ("organizationName", &self.organization_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("gstin", &self.gstin),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                violations.push(RegistrationViolation {
                    field,
                    message: format!("{field} is required"),
                });
            }
        }

        if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            violations.push(RegistrationViolation {
                field: "email",
                message: format!("'{}' is not a valid email address", self.email),
            });
        }
        if !self.phone.trim().is_empty() && !is_valid_phone(&self.phone) {
            violations.push(RegistrationViolation {
                field: "phone",
                message: format!("'{}' is not a valid Indian phone number", self.phone),
            });
        }
        // Admin accounts carry placeholder GSTINs.
        if self.role == OrganizationRole::Organization
            && !self.gstin.trim().is_empty()
            && !is_valid_gstin(&self.gstin)
        {
            violations.push(RegistrationViolation {
                field: "gstin",
                message: format!("'{}' is not a valid GSTIN", self.gstin),
            });
        }

        violations
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == OrganizationRole::Admin
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Indian mobile number, optionally prefixed with `+91`. Spaces are ignored.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| *c != ' ').collect();
    PHONE_RE.is_match(&compact)
}

/// 15-character Goods and Services Tax Identification Number.
#[must_use]
pub fn is_valid_gstin(gstin: &str) -> bool {
    GSTIN_RE.is_match(gstin)
}
