use crate::types::scoring::{ComparisonEntry, MatchResult, Score};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub score: Score,
    pub most_similar: Option<ComparisonEntry>,
    pub least_similar: Option<ComparisonEntry>,
    pub comparisons: Vec<ComparisonEntry>,
}

impl From<&MatchResult> for MatchReport {
    fn from(result: &MatchResult) -> Self {
        Self {
            score: result.score,
            most_similar: result.most_similar().cloned(),
            least_similar: result.least_similar().cloned(),
            comparisons: result.comparisons.clone(),
        }
    }
}
