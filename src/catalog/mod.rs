//! Questionnaire catalog.
//!
//! The catalog is the single source of truth for question ids, categories,
//! weights and remediation text. Its order is significant: scoring walks it
//! front to back and recommendation ranking breaks ties by catalog position.
//!
//! The built-in DPDP questionnaire is available through
//! [`QuestionCatalog::dpdp`]. Alternate catalogs can be loaded from YAML or
//! JSON; they are validated once at load time so that a malformed catalog
//! fails fast instead of skewing individual assessments.
//!
//! ```
//! use dpdp_assess::catalog::QuestionCatalog;
//!
//! let catalog = QuestionCatalog::dpdp();
//! assert_eq!(catalog.len(), 25);
//! assert_eq!(catalog.total_weight(), 107.0);
//! ```

mod dpdp;

use crate::error::{AssessError, CatalogErrorKind, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

static DPDP_CATALOG: LazyLock<QuestionCatalog> = LazyLock::new(dpdp::build);

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: String,
    pub category: String,
    pub weight: f64,
    /// Remediation shown when the question is not fully met
    #[serde(alias = "recommendationText")]
    pub recommendation: String,
}

impl QuestionDefinition {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        weight: f64,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            weight,
            recommendation: recommendation.into(),
        }
    }
}

/// Validated, ordered question catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDefinition>,
}

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    questions: Vec<QuestionDefinition>,
}

impl QuestionCatalog {
    /// The built-in DPDP questionnaire (25 questions, 13 categories).
    #[must_use]
    pub fn dpdp() -> &'static Self {
        &DPDP_CATALOG
    }

    /// Build a catalog, rejecting empty catalogs, empty or duplicate ids,
    /// empty categories and weights that are not positive and finite.
    pub fn new(questions: Vec<QuestionDefinition>) -> Result<Self> {
        validate(&questions).map_err(|kind| AssessError::catalog("validating catalog", kind))?;
        Ok(Self { questions })
    }

    /// Parse a catalog from YAML (`questions: [...]`).
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_yaml_ng::from_str(content).map_err(|e| {
            AssessError::catalog("parsing YAML catalog", CatalogErrorKind::Malformed(e.to_string()))
        })?;
        Self::new(doc.questions)
    }

    /// Parse a catalog from JSON (`{"questions": [...]}`).
    pub fn from_json_str(content: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(content).map_err(|e| {
            AssessError::catalog("parsing JSON catalog", CatalogErrorKind::Malformed(e.to_string()))
        })?;
        Self::new(doc.questions)
    }

    /// Load a catalog file. `.json` files are parsed as JSON, everything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AssessError::io(path.to_path_buf(), e))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        };
        catalog.with_context(|| format!("loading catalog from {}", path.display()))
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionDefinition> {
        self.questions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Position of a question in catalog order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    /// Question ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.id.as_str())
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .map(|q| q.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Sum of all weights. Strictly positive for a validated catalog.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.questions.iter().map(|q| q.weight).sum()
    }
}

impl<'a> IntoIterator for &'a QuestionCatalog {
    type Item = &'a QuestionDefinition;
    type IntoIter = std::slice::Iter<'a, QuestionDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

fn validate(questions: &[QuestionDefinition]) -> std::result::Result<(), CatalogErrorKind> {
    if questions.is_empty() {
        return Err(CatalogErrorKind::Empty);
    }

    let mut ids = HashSet::with_capacity(questions.len());
    for (index, q) in questions.iter().enumerate() {
        if q.id.trim().is_empty() {
            return Err(CatalogErrorKind::EmptyId { index });
        }
        if !ids.insert(q.id.as_str()) {
            return Err(CatalogErrorKind::DuplicateId { id: q.id.clone() });
        }
        if q.category.trim().is_empty() {
            return Err(CatalogErrorKind::EmptyCategory { id: q.id.clone() });
        }
        if !q.weight.is_finite() || q.weight <= 0.0 {
            return Err(CatalogErrorKind::InvalidWeight {
                id: q.id.clone(),
                weight: q.weight,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(result: Result<QuestionCatalog>) -> CatalogErrorKind {
        match result {
            Err(err) => err
                .catalog_kind()
                .cloned()
                .unwrap_or_else(|| panic!("expected catalog error, got {err:?}")),
            Ok(_) => panic!("expected catalog error"),
        }
    }

    #[test]
    fn test_dpdp_catalog_shape() {
        let catalog = QuestionCatalog::dpdp();
        assert_eq!(catalog.len(), 25);
        assert_eq!(catalog.categories().len(), 13);
        assert_eq!(catalog.total_weight(), 107.0);
        assert_eq!(catalog.questions()[0].id, "q1");
        assert_eq!(catalog.questions()[24].id, "q25");
    }

    #[test]
    fn test_dpdp_consent_weights() {
        let catalog = QuestionCatalog::dpdp();
        let weights: Vec<f64> = ["q1", "q2", "q3"]
            .iter()
            .map(|id| catalog.get(id).map(|q| q.weight).unwrap_or_default())
            .collect();
        assert_eq!(weights, vec![5.0, 4.0, 4.0]);
        assert!(
            ["q1", "q2", "q3"]
                .iter()
                .all(|id| catalog.get(id).is_some_and(|q| q.category == "Consent Management"))
        );
    }

    #[test]
    fn test_categories_first_seen_order() {
        let categories = QuestionCatalog::dpdp().categories();
        assert_eq!(categories[0], "Consent Management");
        assert_eq!(categories[1], "Data Principal Rights");
        assert_eq!(categories[10], "Accountability");
        assert_eq!(categories[12], "Compliance");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(kind_of(QuestionCatalog::new(Vec::new())), CatalogErrorKind::Empty);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let questions = vec![
            QuestionDefinition::new("a", "Cat", 1.0, "do a"),
            QuestionDefinition::new("b", "Cat", -2.0, "do b"),
        ];
        assert!(matches!(
            kind_of(QuestionCatalog::new(questions)),
            CatalogErrorKind::InvalidWeight { ref id, .. } if id == "b"
        ));
    }

    #[test]
    fn test_rejects_zero_and_nan_weight() {
        let zero = vec![QuestionDefinition::new("a", "Cat", 0.0, "x")];
        assert!(matches!(
            kind_of(QuestionCatalog::new(zero)),
            CatalogErrorKind::InvalidWeight { .. }
        ));
        let nan = vec![QuestionDefinition::new("a", "Cat", f64::NAN, "x")];
        assert!(matches!(
            kind_of(QuestionCatalog::new(nan)),
            CatalogErrorKind::InvalidWeight { .. }
        ));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let questions = vec![
            QuestionDefinition::new("a", "Cat", 1.0, "x"),
            QuestionDefinition::new("a", "Other", 1.0, "y"),
        ];
        assert_eq!(
            kind_of(QuestionCatalog::new(questions)),
            CatalogErrorKind::DuplicateId { id: "a".to_string() }
        );
    }

    #[test]
    fn test_rejects_blank_id_and_category() {
        let blank_id = vec![QuestionDefinition::new(" ", "Cat", 1.0, "x")];
        assert_eq!(
            kind_of(QuestionCatalog::new(blank_id)),
            CatalogErrorKind::EmptyId { index: 0 }
        );
        let blank_cat = vec![QuestionDefinition::new("a", "", 1.0, "x")];
        assert_eq!(
            kind_of(QuestionCatalog::new(blank_cat)),
            CatalogErrorKind::EmptyCategory { id: "a".to_string() }
        );
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r"
questions:
  - id: s1
    category: Security
    weight: 2.5
    recommendation: Rotate keys
  - id: s2
    category: Security
    weight: 1
    recommendationText: Enable MFA
";
        let catalog = QuestionCatalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.total_weight(), 3.5);
        assert_eq!(catalog.get("s2").map(|q| q.recommendation.as_str()), Some("Enable MFA"));
        assert_eq!(catalog.position("s2"), Some(1));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            kind_of(QuestionCatalog::from_json_str("{\"questions\": 3}")),
            CatalogErrorKind::Malformed(_)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"questions": [{"id": "x1", "category": "C", "weight": 3, "recommendation": "r"}]}"#,
        )
        .unwrap();
        let catalog = QuestionCatalog::load(&path).unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["x1"]);
    }

    #[test]
    fn test_load_invalid_file_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "questions: []\n").unwrap();
        let err = QuestionCatalog::load(&path).unwrap_err();
        match err {
            AssessError::Catalog { context, source } => {
                assert!(context.contains("bad.yaml"), "context: {context}");
                assert_eq!(source, CatalogErrorKind::Empty);
            }
            other => panic!("expected catalog error, got {other:?}"),
        }
    }
}
