use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::MealCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{CostTier, DayReport, Macros, MealPlan, PlanSlotAssignment, SlotCategory};
use crate::planner::{PlanTargets, PlannerConfig, validate_plan_length};

/// Baseline selector: a uniform draw among the slot's tier-eligible meals.
///
/// Ignores macro targets and the variety window. Cheaper tiers are only
/// admitted when the requested tier has no meal for the slot at all.
pub fn assemble_random<R: Rng + ?Sized>(
    catalog: &MealCatalog,
    config: &PlannerConfig,
    targets: &PlanTargets,
    tier: CostTier,
    days: u32,
    rng: &mut R,
) -> Result<MealPlan> {
    validate_plan_length(days)?;
    let tiers = config.tier_fallbacks(tier);

    let mut assignments = Vec::with_capacity(days as usize * SlotCategory::ALL.len());
    let mut day_reports = Vec::with_capacity(days as usize);

    for day in 1..=days {
        let mut realized = Macros::default();
        let mut slot_deviation = 0.0;

        for slot in SlotCategory::ALL {
            let meal = (1..=tiers.len())
                .map(|n| catalog.candidates(slot, &tiers[..n]).collect::<Vec<_>>())
                .find(|pool| !pool.is_empty())
                .and_then(|pool| pool.choose(rng).map(|m| (*m).clone()))
                .ok_or(PlannerError::CatalogExhausted { day, slot })?;

            realized = realized.add(&meal.macros());
            slot_deviation += meal.macros().total_deviation(&targets.slot(slot).macros());
            assignments.push(PlanSlotAssignment { day, slot, meal });
        }

        day_reports.push(DayReport {
            day,
            target: targets.daily.macros(),
            realized,
            slot_deviation,
        });
    }

    Ok(MealPlan {
        days,
        tier,
        daily_target: targets.daily,
        slot_targets: targets.slots.clone(),
        assignments,
        relaxations: Vec::new(),
        day_reports,
    })
}
