use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{CostTier, Goal, SlotCategory};
use crate::planner::constants::*;

/// Weights of the per-macro absolute deviations in the slot score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroWeights {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for MacroWeights {
    fn default() -> Self {
        Self {
            protein: 1.0,
            carbs: 1.0,
            fat: 1.0,
        }
    }
}

impl MacroWeights {
    /// Equal weighting, except protein counts most when building muscle.
    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::Bulk => Self {
                protein: BULK_PROTEIN_WEIGHT,
                ..Default::default()
            },
            Goal::Cut | Goal::Maintain => Self::default(),
        }
    }
}

/// Calorie adjustment and macro split for one goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    /// Fraction added to TDEE (negative for a deficit).
    pub calorie_adjustment: f64,
    pub protein_g_per_kg: f64,
    /// Share of calories that come from fat.
    pub fat_fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalRatios {
    pub cut: MacroRatios,
    pub maintain: MacroRatios,
    pub bulk: MacroRatios,
}

impl Default for GoalRatios {
    fn default() -> Self {
        Self {
            cut: MacroRatios {
                calorie_adjustment: CUT_CALORIE_ADJUSTMENT,
                protein_g_per_kg: CUT_PROTEIN_G_PER_KG,
                fat_fraction: CUT_FAT_FRACTION,
            },
            maintain: MacroRatios {
                calorie_adjustment: MAINTAIN_CALORIE_ADJUSTMENT,
                protein_g_per_kg: MAINTAIN_PROTEIN_G_PER_KG,
                fat_fraction: MAINTAIN_FAT_FRACTION,
            },
            bulk: MacroRatios {
                calorie_adjustment: BULK_CALORIE_ADJUSTMENT,
                protein_g_per_kg: BULK_PROTEIN_G_PER_KG,
                fat_fraction: BULK_FAT_FRACTION,
            },
        }
    }
}

impl GoalRatios {
    pub fn for_goal(&self, goal: Goal) -> &MacroRatios {
        match goal {
            Goal::Cut => &self.cut,
            Goal::Maintain => &self.maintain,
            Goal::Bulk => &self.bulk,
        }
    }
}

/// Tunable planning policy. Every field has a default, so a JSON file may
/// override only what it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub slot_proportions: BTreeMap<SlotCategory, f64>,
    /// Explicit weights; `None` derives them from the goal.
    pub weights: Option<MacroWeights>,
    pub variety_cap: u32,
    pub relaxed_variety_cap: u32,
    pub window_days: u32,
    /// Most expensive first. Fallback only ever walks towards cheaper tiers.
    pub tier_relaxation_order: Vec<CostTier>,
    pub goal_ratios: GoalRatios,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            slot_proportions: DEFAULT_SLOT_PROPORTIONS.iter().copied().collect(),
            weights: None,
            variety_cap: DEFAULT_VARIETY_CAP,
            relaxed_variety_cap: DEFAULT_RELAXED_VARIETY_CAP,
            window_days: DEFAULT_WINDOW_DAYS,
            tier_relaxation_order: vec![CostTier::Premium, CostTier::Standard, CostTier::Budget],
            goal_ratios: GoalRatios::default(),
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        for slot in SlotCategory::ALL {
            match self.slot_proportions.get(&slot) {
                None => {
                    return Err(PlannerError::InvalidConfig(format!(
                        "missing slot proportion for {}",
                        slot
                    )));
                }
                Some(&share) if !share.is_finite() || share < 0.0 => {
                    return Err(PlannerError::InvalidConfig(format!(
                        "slot proportion for {} must be non-negative, got {}",
                        slot, share
                    )));
                }
                Some(_) => {}
            }
        }
        let total: f64 = self.slot_proportions.values().sum();
        if (total - 1.0).abs() > PROPORTION_SUM_TOLERANCE {
            return Err(PlannerError::InvalidConfig(format!(
                "slot proportions must sum to 1.0, got {:.4}",
                total
            )));
        }

        if let Some(w) = &self.weights {
            let all = [w.protein, w.carbs, w.fat];
            if all.iter().any(|v| !v.is_finite() || *v < 0.0) || all.iter().all(|v| *v == 0.0) {
                return Err(PlannerError::InvalidConfig(
                    "macro weights must be non-negative and not all zero".to_string(),
                ));
            }
        }

        if self.variety_cap == 0 {
            return Err(PlannerError::InvalidConfig(
                "variety cap must be at least 1".to_string(),
            ));
        }
        if self.relaxed_variety_cap < self.variety_cap {
            return Err(PlannerError::InvalidConfig(format!(
                "relaxed variety cap {} is below the variety cap {}",
                self.relaxed_variety_cap, self.variety_cap
            )));
        }
        if self.window_days == 0 {
            return Err(PlannerError::InvalidConfig(
                "variety window must be at least one day".to_string(),
            ));
        }

        if self.tier_relaxation_order.is_empty() {
            return Err(PlannerError::InvalidConfig(
                "tier relaxation order must not be empty".to_string(),
            ));
        }
        if self.tier_relaxation_order.windows(2).any(|w| w[1] >= w[0]) {
            return Err(PlannerError::InvalidConfig(
                "tier relaxation order must go from expensive to cheaper tiers".to_string(),
            ));
        }

        for (goal, ratios) in [
            (Goal::Cut, &self.goal_ratios.cut),
            (Goal::Maintain, &self.goal_ratios.maintain),
            (Goal::Bulk, &self.goal_ratios.bulk),
        ] {
            if ratios.protein_g_per_kg <= 0.0
                || !(0.0..1.0).contains(&ratios.fat_fraction)
                || ratios.calorie_adjustment <= -1.0
            {
                return Err(PlannerError::InvalidConfig(format!(
                    "macro ratios for goal {} are out of range",
                    goal
                )));
            }
        }

        Ok(())
    }

    pub fn slot_share(&self, slot: SlotCategory) -> f64 {
        self.slot_proportions.get(&slot).copied().unwrap_or(0.0)
    }

    pub fn weights_for(&self, goal: Goal) -> MacroWeights {
        self.weights.unwrap_or_else(|| MacroWeights::for_goal(goal))
    }

    /// Tiers admitted at each relaxation step, starting with the requested one.
    ///
    /// Only tiers cheaper than the requested one are ever added.
    pub fn tier_fallbacks(&self, requested: CostTier) -> Vec<CostTier> {
        let mut tiers = vec![requested];
        tiers.extend(
            self.tier_relaxation_order
                .iter()
                .copied()
                .filter(|t| *t < requested),
        );
        tiers
    }
}
