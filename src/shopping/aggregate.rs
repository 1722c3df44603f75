use std::collections::BTreeMap;

use crate::error::{PlannerError, Result};
use crate::models::{Ingredient, MealPlan, Unit};

/// Summed quantity of one ingredient across a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateEntry {
    /// Name as first seen in the plan.
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
}

/// Ingredient key → summed quantity. Quantities only ever grow until `reset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientAggregate {
    entries: BTreeMap<String, AggregateEntry>,
}

impl IngredientAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one ingredient. A unit different from the one already recorded
    /// for the same key is an error and leaves the aggregate untouched.
    pub fn add(&mut self, ingredient: &Ingredient) -> Result<()> {
        if !ingredient.quantity.is_finite() || ingredient.quantity < 0.0 {
            return Err(PlannerError::InvalidCatalog(format!(
                "ingredient '{}' has invalid quantity {}",
                ingredient.name, ingredient.quantity
            )));
        }

        let key = ingredient.key();
        match self.entries.get_mut(&key) {
            Some(entry) if entry.unit != ingredient.unit => Err(PlannerError::UnitMismatch {
                ingredient: entry.name.clone(),
                expected: entry.unit,
                found: ingredient.unit,
            }),
            Some(entry) => {
                entry.quantity += ingredient.quantity;
                Ok(())
            }
            None => {
                self.entries.insert(
                    key,
                    AggregateEntry {
                        name: ingredient.name.trim().to_string(),
                        quantity: ingredient.quantity,
                        unit: ingredient.unit,
                    },
                );
                Ok(())
            }
        }
    }

    pub fn extend<'a, I>(&mut self, ingredients: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Ingredient>,
    {
        for ingredient in ingredients {
            self.add(ingredient)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AggregateEntry> {
        self.entries.get(&crate::models::normalize_name(name))
    }

    /// Entries ordered by normalized ingredient key.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AggregateEntry)> {
        self.entries.iter()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sum every ingredient of every assigned meal.
pub fn aggregate_ingredients(plan: &MealPlan) -> Result<IngredientAggregate> {
    let mut aggregate = IngredientAggregate::new();
    for assignment in &plan.assignments {
        aggregate.extend(&assignment.meal.ingredients)?;
    }
    Ok(aggregate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_same_key_case_insensitively() {
        let mut agg = IngredientAggregate::new();
        agg.add(&Ingredient::new("Кисело мляко", 250.0, Unit::Gram))
            .unwrap();
        agg.add(&Ingredient::new("кисело мляко ", 400.0, Unit::Gram))
            .unwrap();

        assert_eq!(agg.len(), 1);
        let entry = agg.get("КИСЕЛО МЛЯКО").unwrap();
        assert_eq!(entry.quantity, 650.0);
        assert_eq!(entry.name, "Кисело мляко");
    }

    #[test]
    fn test_unit_mismatch_is_an_error() {
        let mut agg = IngredientAggregate::new();
        agg.add(&Ingredient::new("мляко", 200.0, Unit::Gram)).unwrap();
        let err = agg
            .add(&Ingredient::new("мляко", 200.0, Unit::Milliliter))
            .unwrap_err();

        match err {
            PlannerError::UnitMismatch {
                ingredient,
                expected,
                found,
            } => {
                assert_eq!(ingredient, "мляко");
                assert_eq!(expected, Unit::Gram);
                assert_eq!(found, Unit::Milliliter);
            }
            other => panic!("unexpected error: {other}"),
        }
        // The failed add did not touch the existing entry.
        assert_eq!(agg.get("мляко").unwrap().quantity, 200.0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut agg = IngredientAggregate::new();
        agg.add(&Ingredient::new("ориз", 100.0, Unit::Gram)).unwrap();
        agg.reset();
        assert!(agg.is_empty());
    }
}
