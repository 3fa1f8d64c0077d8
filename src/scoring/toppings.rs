use super::normalize::{average, relative_share};
use crate::reference::{Category, ReferenceDataset};
use crate::types::scoring::{ComparisonEntry, Score};
use crate::types::selections::Toppings;
use tracing::debug;

pub const NO_TOPPINGS: &str = "None";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToppingsScore {
    pub raw_average: Score,
    pub normalized_average: Score,
}

/// Averages over every selected topping. Unknown names add nothing to the sums
/// but still count toward the denominator.
pub fn score_toppings(toppings: &Toppings, dataset: &ReferenceDataset) -> ToppingsScore {
    if toppings.is_empty() {
        return ToppingsScore {
            raw_average: 0,
            normalized_average: 0,
        };
    }

    let toppings_max = dataset.max_percentage(Category::Toppings);
    let mut raw_sum = 0.0;
    let mut normalized_sum = 0.0;
    for name in toppings.iter() {
        match dataset.find(Category::Toppings, name) {
            Some(entry) => {
                raw_sum += f64::from(entry.percentage);
                normalized_sum += relative_share(entry.percentage, toppings_max);
            }
            None => debug!(topping = name, "unknown topping counted with no share"),
        }
    }

    let score = ToppingsScore {
        raw_average: average(raw_sum, toppings.len()),
        normalized_average: average(normalized_sum, toppings.len()),
    };
    debug!(
        selected = toppings.len(),
        raw_average = score.raw_average,
        normalized_average = score.normalized_average,
        "scored toppings"
    );
    score
}

pub fn toppings_comparison(toppings: &Toppings, score: ToppingsScore) -> ComparisonEntry {
    let user_choice = if toppings.is_empty() {
        NO_TOPPINGS.to_string()
    } else {
        toppings.joined()
    };
    ComparisonEntry::new(Category::Toppings, user_choice, score.normalized_average)
}
