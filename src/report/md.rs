use crate::types::report::MatchReport;
use crate::types::scoring::ComparisonEntry;

const BAR_WIDTH: u32 = 20;

pub fn to_markdown(report: &MatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Pizza Match\n\n");
    output.push_str(&format!(
        "Your pizza is {}% similar to the average American\n\n",
        report.score
    ));

    if let Some(most) = &report.most_similar {
        output.push_str(&format!("- most similar: {}\n", highlight(most)));
    }
    if let Some(least) = &report.least_similar {
        output.push_str(&format!("- least similar: {}\n", highlight(least)));
    }
    output.push('\n');

    output.push_str("## How Your Choices Compare\n\n");
    for entry in &report.comparisons {
        output.push_str(&format!(
            "- {}: {} {:>3}% [{}]\n",
            entry.category,
            entry.user_choice,
            entry.percentage,
            bar(entry.percentage)
        ));
    }

    output
}

fn highlight(entry: &ComparisonEntry) -> String {
    format!(
        "{} | {} ({}%)",
        entry.category, entry.user_choice, entry.percentage
    )
}

fn bar(percentage: u32) -> String {
    let filled = (percentage.min(100) * BAR_WIDTH + 50) / 100;
    let mut bar = "#".repeat(filled as usize);
    bar.push_str(&".".repeat((BAR_WIDTH - filled) as usize));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Category;
    use crate::types::scoring::MatchResult;

    #[test]
    fn markdown_report_contains_sections() {
        let result = MatchResult {
            score: 62,
            comparisons: vec![
                ComparisonEntry::new(Category::EatingMethod, "Both equally", 21),
                ComparisonEntry::new(Category::Toppings, "Pepperoni, Bacon", 82),
            ],
        };

        let rendered = to_markdown(&MatchReport::from(&result));
        assert!(rendered.contains("# Pizza Match"));
        assert!(rendered.contains("62% similar"));
        assert!(rendered.contains("- most similar: Toppings | Pepperoni, Bacon (82%)"));
        assert!(rendered.contains("- least similar: Eating Method | Both equally (21%)"));
        assert!(rendered.contains("## How Your Choices Compare"));
    }

    #[test]
    fn bar_scales_to_fixed_width() {
        assert_eq!(bar(0), ".".repeat(20));
        assert_eq!(bar(100), "#".repeat(20));
        assert_eq!(bar(50), format!("{}{}", "#".repeat(10), ".".repeat(10)));
    }
}
