pub mod normalize;
pub mod toppings;

use crate::reference::{Category, ReferenceDataset};
use crate::types::scoring::{ComparisonEntry, MatchResult};
use crate::types::selections::Selections;
use normalize::{average, normalize};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownSelection {
    pub category: Category,
    pub value: String,
}

/// Scores `selections` against `dataset`: each answered category is normalized
/// against its own maximum, then all scored factors are averaged.
pub fn calculate_match(selections: &Selections, dataset: &ReferenceDataset) -> MatchResult {
    let mut comparisons = Vec::with_capacity(Category::SINGLE_CHOICE.len() + 1);
    let mut total: u32 = 0;
    let mut factors: usize = 0;

    for category in Category::SINGLE_CHOICE {
        let Some(choice) = selections.choice(category) else {
            continue;
        };
        let Some(entry) = dataset.find(category, choice) else {
            debug!(%category, choice, "dropping unknown selection");
            continue;
        };
        let percentage = normalize(entry.percentage, dataset.max_percentage(category));
        total += percentage;
        factors += 1;
        comparisons.push(ComparisonEntry::new(category, choice, percentage));
    }

    let toppings_score = toppings::score_toppings(&selections.toppings, dataset);
    total += toppings_score.normalized_average;
    factors += 1;
    comparisons.push(toppings::toppings_comparison(
        &selections.toppings,
        toppings_score,
    ));

    let score = average(f64::from(total), factors);
    debug!(score, factors, "match calculated");
    MatchResult { score, comparisons }
}

/// Values that name no reference entry in their category.
pub fn unknown_selections(
    selections: &Selections,
    dataset: &ReferenceDataset,
) -> Vec<UnknownSelection> {
    let single = Category::SINGLE_CHOICE.into_iter().filter_map(|category| {
        selections
            .choice(category)
            .filter(|choice| dataset.find(category, choice).is_none())
            .map(|choice| UnknownSelection {
                category,
                value: choice.to_string(),
            })
    });
    let toppings = selections
        .toppings
        .iter()
        .filter(|name| dataset.find(Category::Toppings, name).is_none())
        .map(|name| UnknownSelection {
            category: Category::Toppings,
            value: name.to_string(),
        });
    single.chain(toppings).collect()
}
