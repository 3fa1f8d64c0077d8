use crate::reference::Category;
use serde::Serialize;

pub type Score = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonEntry {
    pub category: Category,
    pub user_choice: String,
    pub percentage: Score,
}

impl ComparisonEntry {
    pub fn new(category: Category, user_choice: impl Into<String>, percentage: Score) -> Self {
        Self {
            category,
            user_choice: user_choice.into(),
            percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub score: Score,
    pub comparisons: Vec<ComparisonEntry>,
}

impl MatchResult {
    /// First entry with the highest percentage, as a stable descending sort would yield.
    pub fn most_similar(&self) -> Option<&ComparisonEntry> {
        self.comparisons
            .iter()
            .reduce(|best, entry| if entry.percentage > best.percentage { entry } else { best })
    }

    /// Last entry with the lowest percentage, as a stable descending sort would yield.
    pub fn least_similar(&self) -> Option<&ComparisonEntry> {
        self.comparisons
            .iter()
            .reduce(|worst, entry| if entry.percentage <= worst.percentage { entry } else { worst })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(percentages: &[(Category, Score)]) -> MatchResult {
        MatchResult {
            score: 0,
            comparisons: percentages
                .iter()
                .map(|(category, percentage)| ComparisonEntry::new(*category, "x", *percentage))
                .collect(),
        }
    }

    #[test]
    fn most_and_least_similar_follow_stable_descending_order() {
        let result = result(&[
            (Category::CrustType, 100),
            (Category::SauceAmount, 34),
            (Category::RegionalStyle, 100),
            (Category::Toppings, 34),
        ]);
        assert_eq!(
            result.most_similar().map(|entry| entry.category),
            Some(Category::CrustType)
        );
        assert_eq!(
            result.least_similar().map(|entry| entry.category),
            Some(Category::Toppings)
        );
    }

    #[test]
    fn single_entry_is_both_most_and_least_similar() {
        let result = result(&[(Category::Toppings, 0)]);
        assert_eq!(result.most_similar(), result.least_similar());
    }

    #[test]
    fn empty_comparisons_have_no_highlights() {
        let result = result(&[]);
        assert!(result.most_similar().is_none());
        assert!(result.least_similar().is_none());
    }
}
