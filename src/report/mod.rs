pub mod json;
pub mod md;
pub mod options;

use crate::error::PizzaError;
use crate::reference::{Category, ReferenceDataset};
use crate::types::report::MatchReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &MatchReport, format: OutputFormat) -> Result<String, PizzaError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PizzaError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_options(
    dataset: &ReferenceDataset,
    category: Category,
    format: OutputFormat,
) -> Result<String, PizzaError> {
    match format {
        OutputFormat::Json => options::to_json(dataset, category).map_err(PizzaError::Json),
        OutputFormat::Md => Ok(options::to_markdown(dataset, category)),
    }
}
