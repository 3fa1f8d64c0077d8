use crate::error::PizzaError;
use crate::types::selections::{Selections, Toppings, DEFAULT_MAX_TOPPINGS};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PizzaConfig {
    pub selections: Option<SelectionsConfig>,
    pub limits: Option<LimitsConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionsConfig {
    pub crust: Option<String>,
    pub sauce: Option<String>,
    pub style: Option<String>,
    pub eating: Option<String>,
    pub cutting: Option<String>,
    #[serde(default)]
    pub toppings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_toppings: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatConfig {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatConfig>,
}

impl PizzaConfig {
    pub fn max_toppings(&self) -> usize {
        self.limits
            .as_ref()
            .and_then(|limits| limits.max_toppings)
            .unwrap_or(DEFAULT_MAX_TOPPINGS)
    }

    pub fn report_format(&self) -> Option<ReportFormatConfig> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn selections(&self) -> Result<Selections, PizzaError> {
        let Some(configured) = &self.selections else {
            return Ok(Selections::default());
        };
        Ok(Selections {
            crust: configured.crust.clone(),
            sauce: configured.sauce.clone(),
            toppings: Toppings::try_from_names(
                configured.toppings.iter().cloned(),
                self.max_toppings(),
            )?,
            style: configured.style.clone(),
            eating: configured.eating.clone(),
            cutting: configured.cutting.clone(),
        })
    }

    pub fn validate(&self) -> Result<(), PizzaError> {
        if self.max_toppings() == 0 {
            return Err(PizzaError::ConfigParse(
                "limits.max_toppings must be greater than 0".to_string(),
            ));
        }

        self.selections().map(|_| ())
    }
}
