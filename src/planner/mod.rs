pub mod assembler;
pub mod config;
pub mod constants;
pub mod history;
pub mod targets;

use rand::Rng;

use crate::catalog::MealCatalog;
use crate::error::Result;
use crate::models::{MealPlan, NutritionProfile};

pub use assembler::{DayPlanAssembler, score_meal, validate_plan_length};
pub use config::{GoalRatios, MacroRatios, MacroWeights, PlannerConfig};
pub use constants::*;
pub use history::UsageHistory;
pub use targets::{
    PlanTargets, basal_metabolic_rate, calculate_daily_target, calculate_targets, split_by_slot,
    total_daily_energy,
};

/// Compute targets for `profile` and assemble a `days`-long plan from `catalog`.
///
/// The profile is validated before anything is selected.
pub fn generate_plan<R: Rng + ?Sized>(
    profile: &NutritionProfile,
    days: u32,
    catalog: &MealCatalog,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<MealPlan> {
    let targets = calculate_targets(profile, config)?;
    DayPlanAssembler::new(catalog, config).assemble(
        &targets,
        profile.goal,
        profile.tier,
        days,
        rng,
    )
}
