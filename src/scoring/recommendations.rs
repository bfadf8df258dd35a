//! Remediation ranking.

use crate::catalog::QuestionCatalog;
use crate::model::{Answer, AnswerSet};
use serde::{Deserialize, Serialize};

/// Maximum number of recommendations returned by [`RecommendationRanker::rank`].
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Recommendation priority. Lower rank sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Priority {
    High,
    Medium,
    /// Part of the priority scheme; the DPDP ranker never emits it.
    Low,
}

impl Priority {
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A remediation action for a question that is not fully met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Catalog question that produced this recommendation
    pub question_id: String,
    pub action: String,
    pub category: String,
    pub priority: Priority,
}

/// Produces the prioritized remediation list for an answer set.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRanker<'a> {
    catalog: &'a QuestionCatalog,
}

impl Default for RecommendationRanker<'static> {
    fn default() -> Self {
        Self::new(QuestionCatalog::dpdp())
    }
}

impl<'a> RecommendationRanker<'a> {
    #[must_use]
    pub const fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Ranked recommendations, capped at [`MAX_RECOMMENDATIONS`].
    #[must_use]
    pub fn rank(&self, answers: &AnswerSet) -> Vec<Recommendation> {
        let mut ranked = self.gaps(answers);
        ranked.truncate(MAX_RECOMMENDATIONS);
        ranked
    }

    /// Every gap, ranked but uncapped.
    ///
    /// `Partial` answers yield `Medium`; anything else short of `Yes`
    /// yields `High`. The sort is stable, so equal priorities keep catalog
    /// order.
    #[must_use]
    pub fn gaps(&self, answers: &AnswerSet) -> Vec<Recommendation> {
        let mut gaps: Vec<Recommendation> = self
            .catalog
            .iter()
            .filter_map(|question| {
                let priority = match answers.get(&question.id) {
                    Answer::Yes => return None,
                    Answer::Partial => Priority::Medium,
                    Answer::No => Priority::High,
                };
                Some(Recommendation {
                    question_id: question.id.clone(),
                    action: question.recommendation.clone(),
                    category: question.category.clone(),
                    priority,
                })
            })
            .collect();
        gaps.sort_by_key(|r| r.priority.rank());
        gaps
    }
}
