use crate::error::Result;
use crate::models::{
    MacroTarget, NutritionProfile, SlotTargets, SlotCategory,
    macros::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN},
};
use crate::planner::config::PlannerConfig;
use crate::planner::constants::*;

/// Daily target plus its per-slot split.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanTargets {
    pub daily: MacroTarget,
    pub slots: SlotTargets,
}

impl PlanTargets {
    pub fn slot(&self, slot: SlotCategory) -> MacroTarget {
        self.slots.get(&slot).copied().unwrap_or_default()
    }
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day.
pub fn basal_metabolic_rate(profile: &NutritionProfile) -> f64 {
    BMR_WEIGHT_COEF * profile.weight_kg
        + BMR_HEIGHT_COEF * profile.height_cm
        + BMR_AGE_COEF * profile.age as f64
        + sex_constant(profile.sex)
}

/// Total daily energy expenditure before the goal adjustment.
pub fn total_daily_energy(profile: &NutritionProfile) -> f64 {
    basal_metabolic_rate(profile) * activity_factor(profile.activity)
}

/// Derive the daily macro target for a profile.
///
/// Protein is fixed per kg of body weight, fat is a share of calories and
/// carbs take whatever energy is left (never below zero).
pub fn calculate_daily_target(
    profile: &NutritionProfile,
    config: &PlannerConfig,
) -> Result<MacroTarget> {
    profile.validate()?;

    let ratios = config.goal_ratios.for_goal(profile.goal);
    let calories = total_daily_energy(profile) * (1.0 + ratios.calorie_adjustment);

    let protein_g = ratios.protein_g_per_kg * profile.weight_kg;
    let fat_g = calories * ratios.fat_fraction / KCAL_PER_G_FAT;
    let remaining = calories - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT;
    let carbs_g = (remaining / KCAL_PER_G_CARBS).max(0.0);

    Ok(MacroTarget {
        calories,
        protein_g,
        fat_g,
        carbs_g,
    })
}

/// Split a daily target across slots using the configured proportions.
pub fn split_by_slot(daily: &MacroTarget, config: &PlannerConfig) -> SlotTargets {
    SlotCategory::ALL
        .into_iter()
        .map(|slot| (slot, daily.scale(config.slot_share(slot))))
        .collect()
}

/// Daily and per-slot targets for a profile.
pub fn calculate_targets(profile: &NutritionProfile, config: &PlannerConfig) -> Result<PlanTargets> {
    config.validate()?;
    let daily = calculate_daily_target(profile, config)?;
    let slots = split_by_slot(&daily, config);
    Ok(PlanTargets { daily, slots })
}
