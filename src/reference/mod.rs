pub mod survey;

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CrustType,
    SauceAmount,
    Toppings,
    RegionalStyle,
    EatingMethod,
    CuttingStyle,
    Frequency,
    EatCrust,
    DippingSauces,
    LeastFavoriteToppings,
}

impl Category {
    /// Single-choice categories in comparison order.
    pub const SINGLE_CHOICE: [Category; 5] = [
        Category::CrustType,
        Category::SauceAmount,
        Category::RegionalStyle,
        Category::EatingMethod,
        Category::CuttingStyle,
    ];

    pub const ALL: [Category; 10] = [
        Category::CrustType,
        Category::SauceAmount,
        Category::Toppings,
        Category::RegionalStyle,
        Category::EatingMethod,
        Category::CuttingStyle,
        Category::Frequency,
        Category::EatCrust,
        Category::DippingSauces,
        Category::LeastFavoriteToppings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::CrustType => "Crust Type",
            Category::SauceAmount => "Sauce Amount",
            Category::Toppings => "Toppings",
            Category::RegionalStyle => "Regional Style",
            Category::EatingMethod => "Eating Method",
            Category::CuttingStyle => "Cutting Style",
            Category::Frequency => "Frequency",
            Category::EatCrust => "Eats Crust",
            Category::DippingSauces => "Dipping Sauces",
            Category::LeastFavoriteToppings => "Least Favorite Toppings",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::CrustType => "crust",
            Category::SauceAmount => "sauce",
            Category::Toppings => "toppings",
            Category::RegionalStyle => "style",
            Category::EatingMethod => "eating",
            Category::CuttingStyle => "cutting",
            Category::Frequency => "frequency",
            Category::EatCrust => "eat-crust",
            Category::DippingSauces => "dipping-sauces",
            Category::LeastFavoriteToppings => "least-favorite-toppings",
        }
    }

    pub fn is_scored(self) -> bool {
        self == Category::Toppings || Self::SINGLE_CHOICE.contains(&self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One surveyed option and the share of respondents who picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub name: &'static str,
    pub percentage: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_percentage: Option<u32>,
}

impl ReferenceEntry {
    pub const fn new(name: &'static str, percentage: u32) -> Self {
        Self {
            name,
            percentage,
            description: None,
            favorite_percentage: None,
        }
    }

    pub const fn described(name: &'static str, percentage: u32, description: &'static str) -> Self {
        Self {
            name,
            percentage,
            description: Some(description),
            favorite_percentage: None,
        }
    }

    pub const fn topping(name: &'static str, percentage: u32, favorite_percentage: u32) -> Self {
        Self {
            name,
            percentage,
            description: None,
            favorite_percentage: Some(favorite_percentage),
        }
    }
}

/// Read-only survey table, one ordered list per category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReferenceDataset {
    pub frequency: &'static [ReferenceEntry],
    pub crust_types: &'static [ReferenceEntry],
    pub eat_crust: &'static [ReferenceEntry],
    pub cutting_styles: &'static [ReferenceEntry],
    pub eating_methods: &'static [ReferenceEntry],
    pub sauce_amounts: &'static [ReferenceEntry],
    pub regional_styles: &'static [ReferenceEntry],
    pub dipping_sauces: &'static [ReferenceEntry],
    pub toppings: &'static [ReferenceEntry],
    pub least_favorite_toppings: &'static [ReferenceEntry],
}

impl ReferenceDataset {
    pub fn survey() -> &'static ReferenceDataset {
        &survey::SURVEY
    }

    pub fn entries(&self, category: Category) -> &'static [ReferenceEntry] {
        match category {
            Category::CrustType => self.crust_types,
            Category::SauceAmount => self.sauce_amounts,
            Category::Toppings => self.toppings,
            Category::RegionalStyle => self.regional_styles,
            Category::EatingMethod => self.eating_methods,
            Category::CuttingStyle => self.cutting_styles,
            Category::Frequency => self.frequency,
            Category::EatCrust => self.eat_crust,
            Category::DippingSauces => self.dipping_sauces,
            Category::LeastFavoriteToppings => self.least_favorite_toppings,
        }
    }

    pub fn find(&self, category: Category, name: &str) -> Option<&'static ReferenceEntry> {
        self.entries(category)
            .iter()
            .find(|entry| entry.name == name)
    }

    pub fn max_percentage(&self, category: Category) -> u32 {
        self.entries(category)
            .iter()
            .map(|entry| entry.percentage)
            .max()
            .unwrap_or(0)
    }
}
