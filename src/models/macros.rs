use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::meal::SlotCategory;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Per-slot share of a daily target.
pub type SlotTargets = BTreeMap<SlotCategory, MacroTarget>;

/// Macro-nutrient grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl Macros {
    pub fn new(protein_g: f64, fat_g: f64, carbs_g: f64) -> Self {
        Self {
            protein_g,
            fat_g,
            carbs_g,
        }
    }

    #[inline]
    pub fn calories(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
            + self.carbs_g * KCAL_PER_G_CARBS
            + self.fat_g * KCAL_PER_G_FAT
    }

    pub fn add(&self, other: &Macros) -> Macros {
        Macros::new(
            self.protein_g + other.protein_g,
            self.fat_g + other.fat_g,
            self.carbs_g + other.carbs_g,
        )
    }

    pub fn scale(&self, factor: f64) -> Macros {
        Macros::new(
            self.protein_g * factor,
            self.fat_g * factor,
            self.carbs_g * factor,
        )
    }

    /// Per-macro absolute difference.
    pub fn abs_diff(&self, other: &Macros) -> Macros {
        Macros::new(
            (self.protein_g - other.protein_g).abs(),
            (self.fat_g - other.fat_g).abs(),
            (self.carbs_g - other.carbs_g).abs(),
        )
    }

    /// Unweighted sum of absolute differences, in grams.
    pub fn total_deviation(&self, other: &Macros) -> f64 {
        let d = self.abs_diff(other);
        d.protein_g + d.fat_g + d.carbs_g
    }
}

/// Energy and macro target for a day or for a single slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl MacroTarget {
    pub fn macros(&self) -> Macros {
        Macros::new(self.protein_g, self.fat_g, self.carbs_g)
    }

    pub fn scale(&self, factor: f64) -> MacroTarget {
        MacroTarget {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carbs_g: self.carbs_g * factor,
        }
    }
}
