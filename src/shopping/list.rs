use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{MealPlan, Unit};
use crate::packs::{GroceryCategory, PackRegistry, PackSize};
use crate::shopping::aggregate::{AggregateEntry, IngredientAggregate, aggregate_ingredients};

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub ingredient: String,
    /// Quantity the plan actually needs.
    pub quantity: f64,
    pub unit: Unit,
    /// `None` when the ingredient has no registry entry.
    pub pack_count: Option<u32>,
    /// `pack_count * standard_pack_size`.
    pub purchased_quantity: Option<f64>,
    pub category: Option<GroceryCategory>,
    pub display: String,
}

/// Shopping list ordered by ingredient key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn get(&self, ingredient: &str) -> Option<&ShoppingItem> {
        let key = crate::models::normalize_name(ingredient);
        self.items
            .iter()
            .find(|i| crate::models::normalize_name(&i.ingredient) == key)
    }

    /// Ingredient → rendered pack string.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.items
            .iter()
            .map(|i| (i.ingredient.clone(), i.display.clone()))
            .collect()
    }

    /// Items grouped by store aisle; unregistered items land in `Other`.
    pub fn grouped(&self) -> BTreeMap<GroceryCategory, Vec<&ShoppingItem>> {
        let mut groups: BTreeMap<GroceryCategory, Vec<&ShoppingItem>> = BTreeMap::new();
        for item in &self.items {
            groups
                .entry(item.category.unwrap_or_default())
                .or_default()
                .push(item);
        }
        groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Format a quantity without trailing zeros: `800`, `12.5`.
pub fn format_quantity(quantity: f64) -> String {
    let rounded = (quantity * 10.0).round() / 10.0;
    if (rounded - rounded.round()).abs() < 1e-9 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Smallest pack count whose total covers `quantity`.
pub fn packs_needed(quantity: f64, pack_size: f64) -> u32 {
    if quantity <= 0.0 {
        return 0;
    }
    let mut count = (quantity / pack_size).ceil().max(1.0) as u32;
    // Guard against the division rounding below the true quotient.
    while (count as f64) * pack_size < quantity {
        count += 1;
    }
    count
}

/// Format a quantity as summed, dropping only float noise past six decimals
/// and trailing zeros: `350`, `0.04`, `33.33`.
pub fn format_exact(quantity: f64) -> String {
    let text = format!("{:.6}", quantity);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Render a raw quantity for an ingredient with no registry entry.
pub fn render_raw(quantity: f64, unit: Unit, ingredient: &str) -> String {
    format!("{}{} {}", format_exact(quantity), unit, ingredient)
}

/// Render a pack count: `2 кофички (800г)`, or `3 банана` for discrete items.
pub fn render_packs(count: u32, pack: &PackSize) -> String {
    if pack.discrete {
        return format!("{} {}", count, pack.form(count));
    }
    let purchased = count as f64 * pack.standard_pack_size;
    format!(
        "{} {} ({}{})",
        count,
        pack.form(count),
        format_quantity(purchased),
        pack.unit
    )
}

fn convert_entry(entry: &AggregateEntry, registry: &PackRegistry) -> Result<ShoppingItem> {
    let Some(found) = registry.lookup(&entry.name) else {
        return Ok(ShoppingItem {
            ingredient: entry.name.clone(),
            quantity: entry.quantity,
            unit: entry.unit,
            pack_count: None,
            purchased_quantity: None,
            category: None,
            display: render_raw(entry.quantity, entry.unit, &entry.name),
        });
    };

    let pack = found.pack;
    if pack.unit != entry.unit {
        return Err(PlannerError::UnitMismatch {
            ingredient: entry.name.clone(),
            expected: pack.unit,
            found: entry.unit,
        });
    }

    let count = packs_needed(entry.quantity, pack.standard_pack_size);
    Ok(ShoppingItem {
        ingredient: entry.name.clone(),
        quantity: entry.quantity,
        unit: entry.unit,
        pack_count: Some(count),
        purchased_quantity: Some(count as f64 * pack.standard_pack_size),
        category: Some(pack.category),
        display: render_packs(count, pack),
    })
}

/// Convert an aggregate into pack format. Pure: same input, same output.
pub fn convert_to_packs(
    aggregate: &IngredientAggregate,
    registry: &PackRegistry,
) -> Result<ShoppingList> {
    let items = aggregate
        .iter()
        .map(|(_, entry)| convert_entry(entry, registry))
        .collect::<Result<Vec<_>>>()?;
    Ok(ShoppingList { items })
}

/// Aggregate a plan's ingredients and convert them to pack format.
pub fn build_shopping_list(plan: &MealPlan, registry: &PackRegistry) -> Result<ShoppingList> {
    let aggregate = aggregate_ingredients(plan)?;
    let list = convert_to_packs(&aggregate, registry)?;
    tracing::debug!(
        items = list.len(),
        days = plan.days,
        "built shopping list"
    );
    Ok(list)
}
