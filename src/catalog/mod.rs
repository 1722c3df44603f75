mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, LazyLock};

use crate::error::{PlannerError, Result};
use crate::models::{CostTier, Meal, SlotCategory, normalize_name};

pub use builtin::builtin_meals;

static BUILTIN_CATALOG: LazyLock<MealCatalog> =
    LazyLock::new(|| MealCatalog::from_trusted(builtin_meals()));

/// Immutable collection of candidate meals, grouped by slot category.
#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    by_category: BTreeMap<SlotCategory, Vec<Arc<Meal>>>,
}

impl MealCatalog {
    /// Build a catalog, rejecting invalid meals and duplicate names within a category.
    pub fn new(meals: Vec<Meal>) -> Result<Self> {
        let mut seen = HashSet::new();
        for meal in &meals {
            if !meal.is_valid() {
                return Err(PlannerError::InvalidCatalog(format!(
                    "meal '{}' has negative macros or empty ingredients",
                    meal.name
                )));
            }
            if !seen.insert(meal.key()) {
                return Err(PlannerError::InvalidCatalog(format!(
                    "duplicate {} meal '{}'",
                    meal.category, meal.name
                )));
            }
        }
        Ok(Self::from_trusted(meals))
    }

    fn from_trusted(meals: Vec<Meal>) -> Self {
        let mut by_category: BTreeMap<SlotCategory, Vec<Arc<Meal>>> = BTreeMap::new();
        for meal in meals {
            by_category
                .entry(meal.category)
                .or_default()
                .push(Arc::new(meal));
        }
        Self { by_category }
    }

    /// The catalog bundled with the crate, loaded once per process.
    pub fn builtin() -> &'static MealCatalog {
        &BUILTIN_CATALOG
    }

    pub fn meals(&self, slot: SlotCategory) -> &[Arc<Meal>] {
        self.by_category
            .get(&slot)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Meals of `slot` whose tier is one of `tiers`, in catalog order.
    pub fn candidates<'a>(
        &'a self,
        slot: SlotCategory,
        tiers: &'a [CostTier],
    ) -> impl Iterator<Item = &'a Arc<Meal>> + 'a {
        self.meals(slot)
            .iter()
            .filter(move |m| tiers.contains(&m.cost_tier))
    }

    /// Look up a meal by name (case-insensitive) within a slot.
    pub fn find(&self, slot: SlotCategory, name: &str) -> Option<&Arc<Meal>> {
        let key = normalize_name(name);
        self.meals(slot)
            .iter()
            .find(|m| normalize_name(&m.name) == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Meal>> {
        self.by_category.values().flatten()
    }

    /// Owned copies of every meal, e.g. for serialization.
    pub fn to_meals(&self) -> Vec<Meal> {
        self.iter().map(|m| m.as_ref().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
