use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::catalog::MealCatalog;
use crate::error::Result;
use crate::evaluation::random::assemble_random;
use crate::models::{MealPlan, NutritionProfile};
use crate::planner::{DayPlanAssembler, PlannerConfig, calculate_targets};

/// Settings for a greedy-vs-random comparison run.
#[derive(Debug, Clone)]
pub struct TrialConfig {
    pub trials: usize,
    /// Trial `i` uses seed `seed + i` for both selectors.
    pub seed: u64,
    pub days: u32,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 20,
            seed: 123,
            days: 7,
        }
    }
}

/// Metrics of one plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanMetrics {
    /// Sum over all slots of |realized - slot target| in grams.
    pub total_deviation: f64,
    /// Same, divided by the number of filled slots.
    pub mean_slot_deviation: f64,
    /// Highest use count of one meal in any rolling window.
    pub max_window_uses: u32,
    pub relaxations: usize,
}

impl PlanMetrics {
    pub fn of(plan: &MealPlan, window_days: u32) -> Self {
        let total_deviation = plan.total_slot_deviation();
        let slots = plan.assignments.len().max(1) as f64;
        Self {
            total_deviation,
            mean_slot_deviation: total_deviation / slots,
            max_window_uses: plan.max_uses_in_window(window_days),
            relaxations: plan.relaxations.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialResult {
    pub seed: u64,
    pub greedy: PlanMetrics,
    pub random: PlanMetrics,
}

impl TrialResult {
    pub fn greedy_wins(&self) -> bool {
        self.greedy.total_deviation < self.random.total_deviation
    }
}

/// Averages across every trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub trials: usize,
    pub days: u32,
    pub avg_greedy_deviation: f64,
    pub avg_random_deviation: f64,
    pub greedy_wins: usize,
    pub per_trial: Vec<TrialResult>,
}

impl ComparisonSummary {
    fn from_trials(days: u32, per_trial: Vec<TrialResult>) -> Self {
        let n = per_trial.len().max(1) as f64;
        let avg_greedy_deviation =
            per_trial.iter().map(|t| t.greedy.total_deviation).sum::<f64>() / n;
        let avg_random_deviation =
            per_trial.iter().map(|t| t.random.total_deviation).sum::<f64>() / n;
        let greedy_wins = per_trial.iter().filter(|t| t.greedy_wins()).count();

        Self {
            trials: per_trial.len(),
            days,
            avg_greedy_deviation,
            avg_random_deviation,
            greedy_wins,
            per_trial,
        }
    }

    /// Relative deviation reduction of greedy over random, in percent.
    pub fn improvement_pct(&self) -> f64 {
        if self.avg_random_deviation > 0.0 {
            (1.0 - self.avg_greedy_deviation / self.avg_random_deviation) * 100.0
        } else {
            0.0
        }
    }
}

/// Run greedy and random selection side by side for every seed.
pub fn compare_selectors(
    profile: &NutritionProfile,
    catalog: &MealCatalog,
    planner: &PlannerConfig,
    trial_config: &TrialConfig,
) -> Result<ComparisonSummary> {
    let targets = calculate_targets(profile, planner)?;
    let assembler = DayPlanAssembler::new(catalog, planner);
    let mut per_trial = Vec::with_capacity(trial_config.trials);

    for i in 0..trial_config.trials {
        let seed = trial_config.seed.wrapping_add(i as u64);

        let mut rng = StdRng::seed_from_u64(seed);
        let greedy = assembler.assemble(
            &targets,
            profile.goal,
            profile.tier,
            trial_config.days,
            &mut rng,
        )?;

        let mut rng = StdRng::seed_from_u64(seed);
        let random = assemble_random(
            catalog,
            planner,
            &targets,
            profile.tier,
            trial_config.days,
            &mut rng,
        )?;

        per_trial.push(TrialResult {
            seed,
            greedy: PlanMetrics::of(&greedy, planner.window_days),
            random: PlanMetrics::of(&random, planner.window_days),
        });
    }

    let summary = ComparisonSummary::from_trials(trial_config.days, per_trial);
    info!(
        trials = summary.trials,
        greedy = summary.avg_greedy_deviation,
        random = summary.avg_random_deviation,
        "selector comparison finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, CostTier, Goal, Sex};

    fn profile() -> NutritionProfile {
        NutritionProfile {
            weight_kg: 80.0,
            height_cm: 175.0,
            age: 30,
            sex: Sex::Male,
            activity: ActivityLevel::Moderate,
            goal: Goal::Bulk,
            tier: CostTier::Standard,
        }
    }

    #[test]
    fn test_greedy_beats_random_on_average() {
        let trial_config = TrialConfig {
            trials: 10,
            seed: 42,
            days: 7,
        };
        let summary = compare_selectors(
            &profile(),
            MealCatalog::builtin(),
            &PlannerConfig::default(),
            &trial_config,
        )
        .unwrap();

        assert_eq!(summary.trials, 10);
        assert!(summary.avg_greedy_deviation < summary.avg_random_deviation);
        assert!(summary.improvement_pct() > 0.0);
    }

    #[test]
    fn test_comparison_is_reproducible() {
        let trial_config = TrialConfig {
            trials: 3,
            seed: 7,
            days: 5,
        };
        let run = || {
            compare_selectors(
                &profile(),
                MealCatalog::builtin(),
                &PlannerConfig::default(),
                &trial_config,
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_empty_summary_has_no_improvement() {
        let summary = ComparisonSummary::from_trials(7, Vec::new());
        assert_eq!(summary.trials, 0);
        assert_eq!(summary.improvement_pct(), 0.0);
    }
}
