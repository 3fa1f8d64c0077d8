use crate::reference::{Category, ReferenceDataset, ReferenceEntry};
use serde::Serialize;

#[derive(Serialize)]
struct OptionsListing<'a> {
    category: Category,
    scored: bool,
    options: &'a [ReferenceEntry],
}

pub fn to_json(dataset: &ReferenceDataset, category: Category) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&OptionsListing {
        category,
        scored: category.is_scored(),
        options: dataset.entries(category),
    })
}

pub fn to_markdown(dataset: &ReferenceDataset, category: Category) -> String {
    let mut output = format!("# {category}\n\n");
    for entry in dataset.entries(category) {
        output.push_str(&format!("- {} ({}%)", entry.name, entry.percentage));
        if let Some(description) = entry.description {
            output.push_str(&format!(": {description}"));
        }
        output.push('\n');
    }
    output
}
