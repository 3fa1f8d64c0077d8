use crate::error::{PizzaError, Result};
use crate::reference::Category;

pub const DEFAULT_MAX_TOPPINGS: usize = 5;

/// Answers collected across the build steps. `None` means the step was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    pub crust: Option<String>,
    pub sauce: Option<String>,
    pub toppings: Toppings,
    pub style: Option<String>,
    pub eating: Option<String>,
    pub cutting: Option<String>,
}

impl Selections {
    pub fn choice(&self, category: Category) -> Option<&str> {
        let value = match category {
            Category::CrustType => &self.crust,
            Category::SauceAmount => &self.sauce,
            Category::RegionalStyle => &self.style,
            Category::EatingMethod => &self.eating,
            Category::CuttingStyle => &self.cutting,
            _ => return None,
        };
        value.as_deref()
    }

    pub fn set_choice(&mut self, category: Category, value: impl Into<String>) {
        let slot = match category {
            Category::CrustType => &mut self.crust,
            Category::SauceAmount => &mut self.sauce,
            Category::RegionalStyle => &mut self.style,
            Category::EatingMethod => &mut self.eating,
            Category::CuttingStyle => &mut self.cutting,
            _ => return,
        };
        *slot = Some(value.into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    LimitReached,
}

/// Distinct topping names in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toppings {
    names: Vec<String>,
}

impl Toppings {
    pub fn try_from_names<I, S>(names: I, limit: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut toppings = Self::default();
        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(PizzaError::BlankTopping(name));
            }
            if toppings.contains(&name) {
                return Err(PizzaError::DuplicateTopping(name));
            }
            toppings.names.push(name);
        }
        if toppings.len() > limit {
            return Err(PizzaError::ToppingLimit {
                limit,
                requested: toppings.len(),
            });
        }
        Ok(toppings)
    }

    pub fn toggle(&mut self, name: &str, limit: usize) -> ToggleOutcome {
        if let Some(index) = self.names.iter().position(|existing| existing == name) {
            self.names.remove(index);
            return ToggleOutcome::Removed;
        }
        if self.names.len() >= limit {
            return ToggleOutcome::LimitReached;
        }
        self.names.push(name.to_string());
        ToggleOutcome::Added
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn joined(&self) -> String {
        self.names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut toppings = Toppings::default();
        assert_eq!(toppings.toggle("Ham", 5), ToggleOutcome::Added);
        assert!(toppings.contains("Ham"));
        assert_eq!(toppings.toggle("Ham", 5), ToggleOutcome::Removed);
        assert!(toppings.is_empty());
    }

    #[test]
    fn toggle_refuses_beyond_limit_but_still_removes() {
        let mut toppings = Toppings::try_from_names(["Ham", "Bacon"], 2).expect("within limit");
        assert_eq!(toppings.toggle("Onions", 2), ToggleOutcome::LimitReached);
        assert_eq!(toppings.len(), 2);
        assert_eq!(toppings.toggle("Ham", 2), ToggleOutcome::Removed);
        assert_eq!(toppings.toggle("Onions", 2), ToggleOutcome::Added);
        assert_eq!(toppings.joined(), "Bacon, Onions");
    }

    #[test]
    fn try_from_names_rejects_duplicates() {
        let err = Toppings::try_from_names(["Ham", "Ham"], 5).expect_err("duplicate should fail");
        assert!(matches!(err, PizzaError::DuplicateTopping(name) if name == "Ham"));
    }

    #[test]
    fn try_from_names_rejects_blank_names() {
        for blank in ["", " ", "\t"] {
            let err = Toppings::try_from_names(["Ham", blank], 5).expect_err("blank should fail");
            assert!(matches!(err, PizzaError::BlankTopping(name) if name == blank));
        }
    }

    #[test]
    fn try_from_names_rejects_lists_over_limit() {
        let names = ["Ham", "Bacon", "Onions", "Olives", "Peppers", "Salami"];
        let err = Toppings::try_from_names(names, DEFAULT_MAX_TOPPINGS)
            .expect_err("six toppings should exceed the default limit");
        assert!(matches!(
            err,
            PizzaError::ToppingLimit {
                limit: 5,
                requested: 6
            }
        ));
    }

    #[test]
    fn choice_reads_single_choice_fields_only() {
        let mut selections = Selections::default();
        selections.set_choice(Category::RegionalStyle, "Detroit");
        selections.set_choice(Category::Toppings, "Ham");
        assert_eq!(selections.choice(Category::RegionalStyle), Some("Detroit"));
        assert_eq!(selections.choice(Category::CrustType), None);
        assert_eq!(selections.choice(Category::Toppings), None);
        assert!(selections.toppings.is_empty());
    }
}
