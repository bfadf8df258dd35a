//! Weighted compliance scorer.
//!
//! Walks the catalog in order, crediting each question's weight by the
//! submitted answer and accumulating totals per category. Only the overall
//! percentage is rounded; category percentages keep full precision so that
//! downstream consumers can round as they see fit.

use crate::catalog::QuestionCatalog;
use crate::model::AnswerSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Earned and possible weight for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub earned: f64,
    pub possible: f64,
    /// `earned / possible * 100`, unrounded. Zero when `possible` is zero.
    pub percentage: f64,
}

impl CategoryScore {
    fn add(&mut self, earned: f64, possible: f64) {
        self.earned += earned;
        self.possible += possible;
    }

    fn finalize(&mut self) {
        self.percentage = percentage_of(self.earned, self.possible);
    }
}

/// Outcome of scoring one answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ScoreResult {
    /// Overall percentage rounded to two decimals. This is the canonical
    /// value stored and classified.
    pub percentage: f64,
    pub total_earned: f64,
    pub total_possible: f64,
    /// Per-category scores in catalog first-seen order.
    pub category_scores: IndexMap<String, CategoryScore>,
}

impl ScoreResult {
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.category_scores.get(name)
    }
}

/// Scores answer sets against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceScorer<'a> {
    catalog: &'a QuestionCatalog,
}

impl Default for ComplianceScorer<'static> {
    fn default() -> Self {
        Self::new(QuestionCatalog::dpdp())
    }
}

impl<'a> ComplianceScorer<'a> {
    #[must_use]
    pub const fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a QuestionCatalog {
        self.catalog
    }

    pub fn score(&self, answers: &AnswerSet) -> ScoreResult {
        let mut total_earned = 0.0;
        let mut total_possible = 0.0;
        let mut category_scores: IndexMap<String, CategoryScore> = IndexMap::new();

        for question in self.catalog {
            let earned = question.weight * answers.get(&question.id).credit_factor();
            total_earned += earned;
            total_possible += question.weight;
            category_scores
                .entry(question.category.clone())
                .or_default()
                .add(earned, question.weight);
        }

        for score in category_scores.values_mut() {
            score.finalize();
        }

        ScoreResult {
            percentage: round2(percentage_of(total_earned, total_possible)),
            total_earned,
            total_possible,
            category_scores,
        }
    }
}

fn percentage_of(earned: f64, possible: f64) -> f64 {
    if possible > 0.0 {
        earned / possible * 100.0
    } else {
        0.0
    }
}

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Answer;

    fn scorer() -> ComplianceScorer<'static> {
        ComplianceScorer::default()
    }

    #[test]
    fn test_all_yes_is_full_score() {
        let answers = AnswerSet::uniform(QuestionCatalog::dpdp().ids(), Answer::Yes);
        let result = scorer().score(&answers);
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.total_earned, 107.0);
        assert_eq!(result.total_possible, 107.0);
        assert!(result.category_scores.values().all(|c| c.percentage == 100.0));
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let result = scorer().score(&AnswerSet::new());
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.total_earned, 0.0);
        assert_eq!(result.total_possible, 107.0);
        assert_eq!(result.category_scores.len(), 13);
    }

    #[test]
    fn test_all_partial_is_half() {
        let answers = AnswerSet::uniform(QuestionCatalog::dpdp().ids(), Answer::Partial);
        let result = scorer().score(&answers);
        assert_eq!(result.percentage, 50.0);
        assert_eq!(result.total_earned, 53.5);
    }

    #[test]
    fn test_mixed_consent_answers() {
        let answers = AnswerSet::new()
            .with("q1", Answer::Yes)
            .with("q2", Answer::Partial)
            .with("q3", Answer::No);
        let result = scorer().score(&answers);

        let consent = result.category("Consent Management").unwrap();
        assert_eq!(consent.earned, 7.0);
        assert_eq!(consent.possible, 13.0);
        assert!((consent.percentage - 53.846_153_846).abs() < 1e-6);
        assert_eq!(result.total_earned, 7.0);
        assert_eq!(result.percentage, 6.54);
    }

    #[test]
    fn test_category_percentage_not_rounded() {
        let answers = AnswerSet::new().with("q1", Answer::Yes);
        let result = scorer().score(&answers);
        let consent = result.category("Consent Management").unwrap();
        assert_eq!(consent.percentage, 5.0 / 13.0 * 100.0);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let answers = AnswerSet::new().with("q99", Answer::Yes).with("extra", Answer::Yes);
        assert_eq!(scorer().score(&answers).percentage, 0.0);
    }

    #[test]
    fn test_categories_in_catalog_order() {
        let result = scorer().score(&AnswerSet::new());
        let names: Vec<&str> = result.category_scores.keys().map(String::as_str).collect();
        assert_eq!(names, QuestionCatalog::dpdp().categories());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = QuestionCatalog::from_yaml_str(
            "questions:\n  - {id: a, category: X, weight: 1, recommendation: r}\n  - {id: b, category: Y, weight: 3, recommendation: r}\n",
        )
        .unwrap();
        let answers = AnswerSet::new().with("b", Answer::Yes);
        let result = ComplianceScorer::new(&catalog).score(&answers);
        assert_eq!(result.percentage, 75.0);
        assert_eq!(result.category("X").map(|c| c.percentage), Some(0.0));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.542_056), 6.54);
        assert_eq!(round2(99.999), 100.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
