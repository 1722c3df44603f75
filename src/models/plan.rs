use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::macros::{MacroTarget, Macros, SlotTargets};
use crate::models::meal::{CostTier, Meal, MealKey, SlotCategory};

/// One filled slot of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSlotAssignment {
    /// 1-based day index.
    pub day: u32,
    pub slot: SlotCategory,
    pub meal: Arc<Meal>,
}

impl PlanSlotAssignment {
    pub fn meal_name(&self) -> &str {
        &self.meal.name
    }

    pub fn macros(&self) -> Macros {
        self.meal.macros()
    }
}

/// A constraint that had to be loosened to fill a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelaxationKind {
    /// A meal was allowed to reach `allowed` uses inside the rolling window.
    VarietyCap { allowed: u32 },
    /// Meals down to tier `allowed` were admitted for a `requested` tier plan.
    Tier { requested: CostTier, allowed: CostTier },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relaxation {
    pub day: u32,
    pub slot: SlotCategory,
    #[serde(flatten)]
    pub kind: RelaxationKind,
}

impl fmt::Display for Relaxation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RelaxationKind::VarietyCap { allowed } => write!(
                f,
                "day {} {}: variety cap raised to {}",
                self.day, self.slot, allowed
            ),
            RelaxationKind::Tier { requested, allowed } => write!(
                f,
                "day {} {}: {} tier fell back to {}",
                self.day, self.slot, requested, allowed
            ),
        }
    }
}

/// Realized vs. target macros for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub day: u32,
    pub target: Macros,
    pub realized: Macros,
    /// Sum over slots of |realized - slot target| in grams.
    pub slot_deviation: f64,
}

impl DayReport {
    pub fn realized_calories(&self) -> f64 {
        self.realized.calories()
    }
}

/// A complete multi-day plan. Owns its assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub days: u32,
    pub tier: CostTier,
    pub daily_target: MacroTarget,
    pub slot_targets: SlotTargets,
    /// Day-major, slot order within a day.
    pub assignments: Vec<PlanSlotAssignment>,
    #[serde(default)]
    pub relaxations: Vec<Relaxation>,
    #[serde(default)]
    pub day_reports: Vec<DayReport>,
}

impl MealPlan {
    pub fn assignments_for_day(&self, day: u32) -> impl Iterator<Item = &PlanSlotAssignment> {
        self.assignments.iter().filter(move |a| a.day == day)
    }

    /// Average realized macros per day.
    pub fn realized_daily_average(&self) -> Macros {
        if self.days == 0 {
            return Macros::default();
        }
        self.assignments
            .iter()
            .fold(Macros::default(), |acc, a| acc.add(&a.macros()))
            .scale(1.0 / self.days as f64)
    }

    /// Sum of |realized - target| over every slot of the plan.
    pub fn total_slot_deviation(&self) -> f64 {
        self.assignments
            .iter()
            .map(|a| {
                let target = self
                    .slot_targets
                    .get(&a.slot)
                    .map(MacroTarget::macros)
                    .unwrap_or_default();
                a.macros().total_deviation(&target)
            })
            .sum()
    }

    /// Highest number of uses of any single meal inside any `window`-day span.
    pub fn max_uses_in_window(&self, window: u32) -> u32 {
        let mut days_by_meal: HashMap<MealKey, Vec<u32>> = HashMap::new();
        for a in &self.assignments {
            days_by_meal.entry(a.meal.key()).or_default().push(a.day);
        }

        let mut worst = 0;
        for days in days_by_meal.values() {
            for &start in days {
                let end = start + window.saturating_sub(1);
                let count = days.iter().filter(|&&d| d >= start && d <= end).count() as u32;
                worst = worst.max(count);
            }
        }
        worst
    }

    pub fn tier_relaxed(&self) -> bool {
        self.relaxations
            .iter()
            .any(|r| matches!(r.kind, RelaxationKind::Tier { .. }))
    }

    pub fn variety_relaxed(&self) -> bool {
        self.relaxations
            .iter()
            .any(|r| matches!(r.kind, RelaxationKind::VarietyCap { .. }))
    }
}
