use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::catalog::MealCatalog;
use crate::error::{PlannerError, Result};
use crate::models::{
    CostTier, DayReport, Goal, Macros, Meal, MealPlan, PlanSlotAssignment, Relaxation,
    RelaxationKind, SlotCategory,
};
use crate::planner::config::{MacroWeights, PlannerConfig};
use crate::planner::constants::{MAX_PLAN_DAYS, SCORE_EPSILON};
use crate::planner::history::UsageHistory;
use crate::planner::targets::PlanTargets;

/// Candidate meal with its computed ranking keys.
#[derive(Debug)]
struct Candidate<'a> {
    meal: &'a Arc<Meal>,
    score: f64,
    last_used: Option<u32>,
}

/// Outcome of filling a single slot.
struct SlotChoice {
    meal: Arc<Meal>,
    relaxations: Vec<RelaxationKind>,
}

/// Weighted absolute deviation of a meal from a slot target. Lower is better.
pub fn score_meal(meal: &Meal, target: &Macros, weights: &MacroWeights) -> f64 {
    let d = meal.macros().abs_diff(target);
    weights.protein * d.protein_g + weights.carbs * d.carbs_g + weights.fat * d.fat_g
}

pub fn validate_plan_length(days: u32) -> Result<()> {
    if days == 0 || days > MAX_PLAN_DAYS {
        return Err(PlannerError::InvalidPlanLength {
            days,
            max: MAX_PLAN_DAYS,
        });
    }
    Ok(())
}

/// Greedy day-by-day selection with a rolling variety window.
pub struct DayPlanAssembler<'a> {
    catalog: &'a MealCatalog,
    config: &'a PlannerConfig,
}

impl<'a> DayPlanAssembler<'a> {
    pub fn new(catalog: &'a MealCatalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Build an N-day plan.
    ///
    /// Slots are filled in day order, then in `SlotCategory::ALL` order. The
    /// random source is only consulted to break exact ties, so a fixed seed
    /// always yields the same plan.
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        targets: &PlanTargets,
        goal: Goal,
        tier: CostTier,
        days: u32,
        rng: &mut R,
    ) -> Result<MealPlan> {
        validate_plan_length(days)?;
        self.config.validate()?;

        let weights = self.config.weights_for(goal);
        let mut history = UsageHistory::new(self.config.window_days);
        let mut assignments = Vec::with_capacity(days as usize * SlotCategory::ALL.len());
        let mut relaxations = Vec::new();
        let mut day_reports = Vec::with_capacity(days as usize);

        for day in 1..=days {
            let mut realized = Macros::default();
            let mut slot_deviation = 0.0;

            for slot in SlotCategory::ALL {
                let slot_target = targets.slot(slot).macros();
                let choice = self.fill_slot(day, slot, &slot_target, &weights, tier, &history, rng)?;

                for kind in choice.relaxations {
                    let relaxation = Relaxation { day, slot, kind };
                    warn!(%relaxation, "constraint relaxed");
                    relaxations.push(relaxation);
                }

                history.record(choice.meal.key(), day);
                realized = realized.add(&choice.meal.macros());
                slot_deviation += choice.meal.macros().total_deviation(&slot_target);

                assignments.push(PlanSlotAssignment {
                    day,
                    slot,
                    meal: choice.meal,
                });
            }

            day_reports.push(DayReport {
                day,
                target: targets.daily.macros(),
                realized,
                slot_deviation,
            });
        }

        info!(
            days,
            tier = %tier,
            meals = assignments.len(),
            relaxations = relaxations.len(),
            "assembled meal plan"
        );

        Ok(MealPlan {
            days,
            tier,
            daily_target: targets.daily,
            slot_targets: targets.slots.clone(),
            assignments,
            relaxations,
            day_reports,
        })
    }

    /// Pick the meal for one slot, relaxing constraints in policy order:
    /// variety cap first, then cheaper tiers one step at a time.
    #[allow(clippy::too_many_arguments)]
    fn fill_slot<R: Rng + ?Sized>(
        &self,
        day: u32,
        slot: SlotCategory,
        target: &Macros,
        weights: &MacroWeights,
        requested: CostTier,
        history: &UsageHistory,
        rng: &mut R,
    ) -> Result<SlotChoice> {
        let tiers = self.config.tier_fallbacks(requested);
        let mut caps = vec![self.config.variety_cap];
        if self.config.relaxed_variety_cap > self.config.variety_cap {
            caps.push(self.config.relaxed_variety_cap);
        }

        for step in 0..tiers.len() {
            let allowed = &tiers[..=step];
            for &cap in &caps {
                let candidates: Vec<Candidate> = self
                    .catalog
                    .candidates(slot, allowed)
                    .filter(|m| history.uses_before(&m.key(), day) < cap)
                    .map(|meal| Candidate {
                        meal,
                        score: score_meal(meal, target, weights),
                        last_used: history.last_used(&meal.key()),
                    })
                    .collect();

                let Some(chosen) = choose_best(&candidates, rng) else {
                    continue;
                };

                debug!(
                    day,
                    slot = %slot,
                    meal = %chosen.meal.name,
                    score = chosen.score,
                    candidates = candidates.len(),
                    "selected meal"
                );

                let mut relaxations = Vec::new();
                let uses = history.uses_before(&chosen.meal.key(), day);
                if uses >= self.config.variety_cap {
                    relaxations.push(RelaxationKind::VarietyCap { allowed: uses + 1 });
                }
                if chosen.meal.cost_tier != requested {
                    relaxations.push(RelaxationKind::Tier {
                        requested,
                        allowed: chosen.meal.cost_tier,
                    });
                }

                return Ok(SlotChoice {
                    meal: Arc::clone(chosen.meal),
                    relaxations,
                });
            }
        }

        Err(PlannerError::CatalogExhausted { day, slot })
    }
}

/// Lowest score wins; ties go to the least recently used meal (never used
/// first), and remaining exact ties are drawn from `rng`.
fn choose_best<'c, 'm, R: Rng + ?Sized>(
    candidates: &'c [Candidate<'m>],
    rng: &mut R,
) -> Option<&'c Candidate<'m>> {
    let best_score = candidates
        .iter()
        .map(|c| c.score)
        .fold(f64::INFINITY, f64::min);

    let finalists: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.score - best_score <= SCORE_EPSILON)
        .collect();

    let oldest = finalists.iter().map(|c| c.last_used).min()?;
    let finalists: Vec<&Candidate> = finalists
        .into_iter()
        .filter(|c| c.last_used == oldest)
        .collect();

    finalists.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, MacroTarget, Unit};
    use crate::planner::targets::split_by_slot;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn meal(name: &str, slot: SlotCategory, tier: CostTier, p: f64, f: f64, c: f64) -> Meal {
        Meal {
            name: name.to_string(),
            category: slot,
            protein_g: p,
            fat_g: f,
            carbs_g: c,
            cost_tier: tier,
            ingredients: vec![Ingredient::new("ориз", 50.0, Unit::Gram)],
        }
    }

    /// Every slot gets the same meals so only the slot target differs.
    fn uniform_catalog(entries: &[(&str, CostTier, f64, f64, f64)]) -> MealCatalog {
        let meals = SlotCategory::ALL
            .into_iter()
            .flat_map(|slot| {
                entries
                    .iter()
                    .map(move |(name, tier, p, f, c)| meal(name, slot, *tier, *p, *f, *c))
            })
            .collect();
        MealCatalog::new(meals).unwrap()
    }

    fn flat_targets(per_slot: Macros) -> PlanTargets {
        let config = PlannerConfig::default();
        let daily = MacroTarget {
            calories: per_slot.calories(),
            protein_g: per_slot.protein_g,
            fat_g: per_slot.fat_g,
            carbs_g: per_slot.carbs_g,
        };
        // Same target for every slot keeps the assertions simple.
        let slots = split_by_slot(&daily, &config)
            .into_keys()
            .map(|slot| (slot, daily))
            .collect();
        PlanTargets { daily, slots }
    }

    #[test]
    fn test_score_meal_weights() {
        let m = meal("A", SlotCategory::Lunch, CostTier::Budget, 30.0, 10.0, 50.0);
        let target = Macros::new(20.0, 10.0, 40.0);
        let equal = MacroWeights::default();
        assert!((score_meal(&m, &target, &equal) - 20.0).abs() < 1e-9);

        let protein_heavy = MacroWeights {
            protein: 2.0,
            ..Default::default()
        };
        assert!((score_meal(&m, &target, &protein_heavy) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_plan_length_bounds() {
        assert!(validate_plan_length(1).is_ok());
        assert!(validate_plan_length(30).is_ok());
        assert!(matches!(
            validate_plan_length(0),
            Err(PlannerError::InvalidPlanLength { days: 0, .. })
        ));
        assert!(validate_plan_length(31).is_err());
    }

    #[test]
    fn test_best_meal_chosen_first() {
        let catalog = uniform_catalog(&[
            ("Близо", CostTier::Standard, 30.0, 10.0, 50.0),
            ("Далеч", CostTier::Standard, 5.0, 40.0, 10.0),
        ]);
        let config = PlannerConfig::default();
        let assembler = DayPlanAssembler::new(&catalog, &config);
        let mut rng = StdRng::seed_from_u64(1);

        let plan = assembler
            .assemble(
                &flat_targets(Macros::new(30.0, 10.0, 50.0)),
                Goal::Maintain,
                CostTier::Standard,
                1,
                &mut rng,
            )
            .unwrap();
        assert!(plan.assignments.iter().all(|a| a.meal_name() == "Близо"));
        assert!(plan.relaxations.is_empty());
    }

    #[test]
    fn test_variety_cap_rotates_meals() {
        let catalog = uniform_catalog(&[
            ("A", CostTier::Standard, 30.0, 10.0, 50.0),
            ("B", CostTier::Standard, 31.0, 10.0, 50.0),
            ("C", CostTier::Standard, 32.0, 10.0, 50.0),
            ("D", CostTier::Standard, 33.0, 10.0, 50.0),
        ]);
        let config = PlannerConfig::default();
        let assembler = DayPlanAssembler::new(&catalog, &config);
        let mut rng = StdRng::seed_from_u64(7);

        let plan = assembler
            .assemble(
                &flat_targets(Macros::new(30.0, 10.0, 50.0)),
                Goal::Maintain,
                CostTier::Standard,
                14,
                &mut rng,
            )
            .unwrap();

        assert!(plan.max_uses_in_window(7) <= 2);
        assert!(plan.relaxations.is_empty());
        let breakfasts: Vec<&str> = plan
            .assignments
            .iter()
            .filter(|a| a.slot == SlotCategory::Breakfast)
            .map(|a| a.meal_name())
            .collect();
        assert_eq!(&breakfasts[..4], &["A", "A", "B", "B"]);
    }

    #[test]
    fn test_variety_relaxed_before_tier() {
        // Three standard meals cover 6 of 7 days; day 7 needs a third use.
        let catalog = uniform_catalog(&[
            ("A", CostTier::Standard, 30.0, 10.0, 50.0),
            ("B", CostTier::Standard, 31.0, 10.0, 50.0),
            ("C", CostTier::Standard, 32.0, 10.0, 50.0),
            ("Евтино", CostTier::Budget, 30.0, 10.0, 50.0),
        ]);
        let config = PlannerConfig::default();
        let assembler = DayPlanAssembler::new(&catalog, &config);
        let mut rng = StdRng::seed_from_u64(3);

        let plan = assembler
            .assemble(
                &flat_targets(Macros::new(30.0, 10.0, 50.0)),
                Goal::Maintain,
                CostTier::Standard,
                7,
                &mut rng,
            )
            .unwrap();

        assert!(plan.variety_relaxed());
        assert!(!plan.tier_relaxed());
        assert!(plan.assignments.iter().all(|a| a.meal.cost_tier == CostTier::Standard));
        assert!(plan.max_uses_in_window(7) <= 3);
        assert!(plan.relaxations.iter().all(|r| r.day == 7));
    }

    #[test]
    fn test_tier_falls_back_to_cheaper_only() {
        let catalog = uniform_catalog(&[
            ("Скъпо", CostTier::Premium, 30.0, 10.0, 50.0),
            ("Евтино", CostTier::Budget, 30.0, 10.0, 50.0),
        ]);
        let config = PlannerConfig::default();
        let assembler = DayPlanAssembler::new(&catalog, &config);
        let mut rng = StdRng::seed_from_u64(3);

        let plan = assembler
            .assemble(
                &flat_targets(Macros::new(30.0, 10.0, 50.0)),
                Goal::Maintain,
                CostTier::Standard,
                2,
                &mut rng,
            )
            .unwrap();

        assert!(plan.assignments.iter().all(|a| a.meal_name() == "Евтино"));
        assert!(plan.relaxations.iter().all(|r| matches!(
            r.kind,
            RelaxationKind::Tier {
                requested: CostTier::Standard,
                allowed: CostTier::Budget
            }
        )));
    }

    #[test]
    fn test_exhausted_catalog_reports_day_and_slot() {
        let catalog = uniform_catalog(&[("Скъпо", CostTier::Premium, 30.0, 10.0, 50.0)]);
        let config = PlannerConfig::default();
        let assembler = DayPlanAssembler::new(&catalog, &config);
        let mut rng = StdRng::seed_from_u64(3);

        let err = assembler
            .assemble(
                &flat_targets(Macros::new(30.0, 10.0, 50.0)),
                Goal::Maintain,
                CostTier::Budget,
                3,
                &mut rng,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            PlannerError::CatalogExhausted {
                day: 1,
                slot: SlotCategory::Breakfast
            }
        ));
    }

    #[test]
    fn test_exhausted_after_relaxed_cap() {
        let catalog = uniform_catalog(&[("Само", CostTier::Budget, 30.0, 10.0, 50.0)]);
        let config = PlannerConfig::default();
        let assembler = DayPlanAssembler::new(&catalog, &config);
        let mut rng = StdRng::seed_from_u64(3);

        let err = assembler
            .assemble(
                &flat_targets(Macros::new(30.0, 10.0, 50.0)),
                Goal::Maintain,
                CostTier::Budget,
                5,
                &mut rng,
            )
            .unwrap_err();
        assert!(matches!(err, PlannerError::CatalogExhausted { day: 4, .. }));
    }

    #[test]
    fn test_ties_prefer_least_recently_used() {
        // Identical macros: only the usage history can separate them.
        let catalog = uniform_catalog(&[
            ("A", CostTier::Budget, 30.0, 10.0, 50.0),
            ("B", CostTier::Budget, 30.0, 10.0, 50.0),
            ("C", CostTier::Budget, 30.0, 10.0, 50.0),
        ]);
        let config = PlannerConfig::default();
        let assembler = DayPlanAssembler::new(&catalog, &config);
        let mut rng = StdRng::seed_from_u64(11);

        let plan = assembler
            .assemble(
                &flat_targets(Macros::new(30.0, 10.0, 50.0)),
                Goal::Maintain,
                CostTier::Budget,
                3,
                &mut rng,
            )
            .unwrap();

        let lunches: Vec<&str> = plan
            .assignments
            .iter()
            .filter(|a| a.slot == SlotCategory::Lunch)
            .map(|a| a.meal_name())
            .collect();
        let mut distinct = lunches.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 3, "expected rotation, got {:?}", lunches);
    }

    #[test]
    fn test_same_seed_same_plan() {
        let catalog = uniform_catalog(&[
            ("A", CostTier::Budget, 30.0, 10.0, 50.0),
            ("B", CostTier::Budget, 30.0, 10.0, 50.0),
            ("C", CostTier::Budget, 30.0, 10.0, 50.0),
            ("D", CostTier::Budget, 30.0, 10.0, 50.0),
        ]);
        let config = PlannerConfig::default();
        let assembler = DayPlanAssembler::new(&catalog, &config);
        let targets = flat_targets(Macros::new(30.0, 10.0, 50.0));

        let a = assembler
            .assemble(&targets, Goal::Maintain, CostTier::Budget, 10, &mut StdRng::seed_from_u64(5))
            .unwrap();
        let b = assembler
            .assemble(&targets, Goal::Maintain, CostTier::Budget, 10, &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_day_reports_track_deviation() {
        let catalog = uniform_catalog(&[
            ("A", CostTier::Budget, 32.0, 10.0, 50.0),
            ("B", CostTier::Budget, 34.0, 10.0, 50.0),
            ("C", CostTier::Budget, 36.0, 10.0, 50.0),
            ("D", CostTier::Budget, 38.0, 10.0, 50.0),
        ]);
        let config = PlannerConfig::default();
        let assembler = DayPlanAssembler::new(&catalog, &config);
        let plan = assembler
            .assemble(
                &flat_targets(Macros::new(30.0, 10.0, 50.0)),
                Goal::Maintain,
                CostTier::Budget,
                2,
                &mut StdRng::seed_from_u64(5),
            )
            .unwrap();

        assert_eq!(plan.day_reports.len(), 2);
        // Day 1 and 2 both use "A" in every slot: 2g off per slot.
        for report in &plan.day_reports {
            assert!((report.slot_deviation - 8.0).abs() < 1e-9);
            assert!((report.realized.protein_g - 128.0).abs() < 1e-9);
        }
        let summed: f64 = plan.day_reports.iter().map(|r| r.slot_deviation).sum();
        assert!((summed - plan.total_slot_deviation()).abs() < 1e-9);
    }
}
