use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::macros::Macros;

/// Meal-time bucket. Plans are filled in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl SlotCategory {
    pub const ALL: [SlotCategory; 4] = [
        SlotCategory::Breakfast,
        SlotCategory::Lunch,
        SlotCategory::Dinner,
        SlotCategory::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotCategory::Breakfast => "breakfast",
            SlotCategory::Lunch => "lunch",
            SlotCategory::Dinner => "dinner",
            SlotCategory::Snack => "snack",
        }
    }
}

impl fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SlotCategory {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(SlotCategory::Breakfast),
            "lunch" => Ok(SlotCategory::Lunch),
            "dinner" => Ok(SlotCategory::Dinner),
            "snack" => Ok(SlotCategory::Snack),
            other => Err(PlannerError::InvalidCatalog(format!(
                "unknown slot category '{}'",
                other
            ))),
        }
    }
}

/// Price bracket. Ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Budget,
    Standard,
    Premium,
}

impl CostTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostTier::Budget => "budget",
            CostTier::Standard => "standard",
            CostTier::Premium => "premium",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostTier {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(CostTier::Budget),
            "standard" => Ok(CostTier::Standard),
            "premium" => Ok(CostTier::Premium),
            other => Err(PlannerError::invalid_profile(
                "tier",
                format!("'{}' is not one of budget, standard, premium", other),
            )),
        }
    }
}

/// Measurement unit of an ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    /// Retail suffix used on shopping lists.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Gram => "г",
            Unit::Milliliter => "мл",
            Unit::Piece => "бр.",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(name: &str, quantity: f64, unit: Unit) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit,
        }
    }

    /// Normalized aggregation key (trimmed, lowercase).
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Identity of a meal: names are only unique within a slot category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MealKey {
    pub category: SlotCategory,
    pub name: String,
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub category: SlotCategory,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub cost_tier: CostTier,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Meal {
    #[inline]
    pub fn macros(&self) -> Macros {
        Macros::new(self.protein_g, self.fat_g, self.carbs_g)
    }

    #[inline]
    pub fn calories(&self) -> f64 {
        self.macros().calories()
    }

    /// Non-negative, finite macros and positive ingredient quantities.
    pub fn is_valid(&self) -> bool {
        let macros_ok = [self.protein_g, self.fat_g, self.carbs_g]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0);
        let ingredients_ok = self
            .ingredients
            .iter()
            .all(|i| i.quantity.is_finite() && i.quantity > 0.0 && !i.name.trim().is_empty());
        macros_ok && ingredients_ok && !self.name.trim().is_empty()
    }

    pub fn key(&self) -> MealKey {
        MealKey {
            category: self.category,
            name: normalize_name(&self.name),
        }
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        Meal {
            name: "Овесена каша".to_string(),
            category: SlotCategory::Breakfast,
            protein_g: 20.0,
            fat_g: 10.0,
            carbs_g: 60.0,
            cost_tier: CostTier::Budget,
            ingredients: vec![Ingredient::new("Овесени ядки", 80.0, Unit::Gram)],
        }
    }

    #[test]
    fn test_calories_use_atwater_factors() {
        let meal = sample_meal();
        assert!((meal.calories() - (80.0 + 90.0 + 240.0)).abs() < 0.001);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_meal().is_valid());

        let mut negative = sample_meal();
        negative.fat_g = -1.0;
        assert!(!negative.is_valid());

        let mut empty_qty = sample_meal();
        empty_qty.ingredients[0].quantity = 0.0;
        assert!(!empty_qty.is_valid());
    }

    #[test]
    fn test_key_is_case_insensitive_within_category() {
        let meal = sample_meal();
        let mut shouted = sample_meal();
        shouted.name = "  ОВЕСЕНА КАША ".to_string();
        assert_eq!(meal.key(), shouted.key());

        shouted.category = SlotCategory::Snack;
        assert_ne!(meal.key(), shouted.key());
    }

    #[test]
    fn test_tier_ordering() {
        assert!(CostTier::Budget < CostTier::Standard);
        assert!(CostTier::Standard < CostTier::Premium);
    }

    #[test]
    fn test_parse_tier() {
        assert_eq!("Premium".parse::<CostTier>().unwrap(), CostTier::Premium);
        assert!(matches!(
            "luxury".parse::<CostTier>(),
            Err(PlannerError::InvalidProfile { field: "tier", .. })
        ));
    }

    #[test]
    fn test_unit_serde_names() {
        let json = serde_json::to_string(&Unit::Milliliter).unwrap();
        assert_eq!(json, "\"ml\"");
        let unit: Unit = serde_json::from_str("\"pcs\"").unwrap();
        assert_eq!(unit, Unit::Piece);
    }
}
