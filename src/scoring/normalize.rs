use crate::types::scoring::Score;

/// Share of the category maximum, 0..=100, unrounded.
pub fn relative_share(percentage: u32, category_max: u32) -> f64 {
    if category_max == 0 {
        return 0.0;
    }
    f64::from(percentage) / f64::from(category_max) * 100.0
}

/// Round half up. Inputs are never negative.
pub fn round_half_up(value: f64) -> Score {
    value.max(0.0).round() as Score
}

pub fn normalize(percentage: u32, category_max: u32) -> Score {
    round_half_up(relative_share(percentage, category_max))
}

pub fn average(sum: f64, count: usize) -> Score {
    if count == 0 {
        return 0;
    }
    round_half_up(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_maximum_normalizes_to_hundred() {
        assert_eq!(normalize(39, 39), 100);
        assert_eq!(normalize(2, 2), 100);
    }

    #[test]
    fn normalize_rounds_to_nearest() {
        assert_eq!(normalize(50, 51), 98);
        assert_eq!(normalize(41, 51), 80);
        assert_eq!(normalize(14, 62), 23);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(12.5), 13);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(normalize(1, 8), 13);
    }

    #[test]
    fn zero_maximum_normalizes_to_zero() {
        assert_eq!(normalize(0, 0), 0);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average(0.0, 0), 0);
        assert_eq!(average(500.0, 6), 83);
    }
}
