//! Questionnaire answers.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Answer to a single questionnaire item.
///
/// Only the exact literals `"Yes"` and `"Partial"` earn credit. Every other
/// value, including absence, lower-case variants, numbers and nulls, is
/// scored as [`Answer::No`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Answer {
    Yes,
    Partial,
    #[default]
    No,
}

impl Answer {
    /// Normalize a submitted literal. Never fails.
    #[must_use]
    pub fn from_literal(literal: &str) -> Self {
        match literal {
            "Yes" => Self::Yes,
            "Partial" => Self::Partial,
            _ => Self::No,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Partial => "Partial",
            Self::No => "No",
        }
    }

    /// Fraction of the question weight this answer earns.
    #[must_use]
    pub const fn credit_factor(&self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::Partial => 0.5,
            Self::No => 0.0,
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => Self::from_literal(&s),
            _ => Self::No,
        })
    }
}

/// Mapping from question id to answer.
///
/// Ids not present in the catalog are kept but ignored by scoring; catalog
/// ids missing from the set read as [`Answer::No`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: IndexMap<String, Answer>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer for a question id, defaulting to `No` when absent.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Answer {
        self.answers.get(question_id).copied().unwrap_or_default()
    }

    /// Whether an explicit answer was submitted for this id.
    #[must_use]
    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) -> Option<Answer> {
        self.answers.insert(question_id.into(), answer)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, question_id: impl Into<String>, answer: Answer) -> Self {
        self.insert(question_id, answer);
        self
    }

    /// The same answer for every id yielded by `ids`.
    #[must_use]
    pub fn uniform<I, S>(ids: I, answer: Answer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter().map(|id| (id.into(), answer)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Answer)> {
        self.answers.iter().map(|(id, a)| (id.as_str(), *a))
    }
}

impl<S: Into<String>> FromIterator<(S, Answer)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (S, Answer)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().map(|(id, a)| (id.into(), a)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_literal_exact_match() {
        assert_eq!(Answer::from_literal("Yes"), Answer::Yes);
        assert_eq!(Answer::from_literal("Partial"), Answer::Partial);
        assert_eq!(Answer::from_literal("No"), Answer::No);
        assert_eq!(Answer::from_literal("yes"), Answer::No);
        assert_eq!(Answer::from_literal("Maybe"), Answer::No);
        assert_eq!(Answer::from_literal(""), Answer::No);
    }

    #[test]
    fn test_missing_id_defaults_to_no() {
        let answers = AnswerSet::new().with("q1", Answer::Yes);
        assert_eq!(answers.get("q1"), Answer::Yes);
        assert_eq!(answers.get("q2"), Answer::No);
        assert!(!answers.contains("q2"));
    }

    #[test]
    fn test_deserialize_malformed_values_as_no() {
        let json = r#"{"q1": "Yes", "q2": "Partial", "q3": 1, "q4": null, "q5": ["Yes"], "q6": "YES"}"#;
        let answers: AnswerSet = serde_json::from_str(json).unwrap();

        assert_eq!(answers.len(), 6);
        assert_eq!(answers.get("q1"), Answer::Yes);
        assert_eq!(answers.get("q2"), Answer::Partial);
        for id in ["q3", "q4", "q5", "q6"] {
            assert_eq!(answers.get(id), Answer::No, "{id} should degrade to No");
        }
    }

    #[test]
    fn test_serialize_as_literals() {
        let answers = AnswerSet::new()
            .with("q1", Answer::Yes)
            .with("q2", Answer::Partial);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"q1":"Yes","q2":"Partial"}"#);
    }

    #[test]
    fn test_uniform() {
        let answers = AnswerSet::uniform(["q1", "q2"], Answer::Partial);
        assert_eq!(answers.len(), 2);
        assert!(answers.iter().all(|(_, a)| a == Answer::Partial));
    }
}
