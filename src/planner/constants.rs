use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, Sex, SlotCategory};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor basal metabolic rate
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = -5.0;
pub const BMR_MALE_CONSTANT: f64 = 5.0;
pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

/// Map from activity level to TDEE multiplier.
pub static ACTIVITY_FACTORS: LazyLock<HashMap<ActivityLevel, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(ActivityLevel::Sedentary, 1.2);
    m.insert(ActivityLevel::Light, 1.375);
    m.insert(ActivityLevel::Moderate, 1.55);
    m.insert(ActivityLevel::Active, 1.725);
    m.insert(ActivityLevel::VeryActive, 1.9);
    m
});

pub fn activity_factor(level: ActivityLevel) -> f64 {
    *ACTIVITY_FACTORS.get(&level).unwrap_or(&1.2)
}

pub fn sex_constant(sex: Sex) -> f64 {
    match sex {
        Sex::Male => BMR_MALE_CONSTANT,
        Sex::Female => BMR_FEMALE_CONSTANT,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Goal ratio table (calorie adjustment, protein per kg, fat share)
// ─────────────────────────────────────────────────────────────────────────────

pub const CUT_CALORIE_ADJUSTMENT: f64 = -0.20;
pub const MAINTAIN_CALORIE_ADJUSTMENT: f64 = 0.0;
pub const BULK_CALORIE_ADJUSTMENT: f64 = 0.15;

pub const CUT_PROTEIN_G_PER_KG: f64 = 2.2;
pub const MAINTAIN_PROTEIN_G_PER_KG: f64 = 1.6;
pub const BULK_PROTEIN_G_PER_KG: f64 = 1.8;

pub const CUT_FAT_FRACTION: f64 = 0.25;
pub const MAINTAIN_FAT_FRACTION: f64 = 0.30;
pub const BULK_FAT_FRACTION: f64 = 0.35;

// ─────────────────────────────────────────────────────────────────────────────
// Slot split and selection policy
// ─────────────────────────────────────────────────────────────────────────────

/// Default share of the daily target per slot.
pub static DEFAULT_SLOT_PROPORTIONS: LazyLock<Vec<(SlotCategory, f64)>> = LazyLock::new(|| {
    vec![
        (SlotCategory::Breakfast, 0.25),
        (SlotCategory::Lunch, 0.35),
        (SlotCategory::Dinner, 0.30),
        (SlotCategory::Snack, 0.10),
    ]
});

/// Protein weight used for the bulk goal when no explicit weights are set.
pub const BULK_PROTEIN_WEIGHT: f64 = 1.5;

/// Maximum uses of one meal inside the rolling window.
pub const DEFAULT_VARIETY_CAP: u32 = 2;

/// Cap applied once the variety constraint has to be relaxed.
pub const DEFAULT_RELAXED_VARIETY_CAP: u32 = 3;

/// Length of the rolling variety window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Plan length used when none is given.
pub const DEFAULT_PLAN_DAYS: u32 = 7;

/// Longest plan accepted.
pub const MAX_PLAN_DAYS: u32 = 30;

/// Scores closer than this are treated as equal.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Tolerance for the slot proportions summing to one.
pub const PROPORTION_SUM_TOLERANCE: f64 = 1e-6;
