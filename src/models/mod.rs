pub mod macros;
pub mod meal;
pub mod plan;
pub mod profile;

pub use macros::{MacroTarget, Macros, SlotTargets};
pub use meal::{CostTier, Ingredient, Meal, MealKey, SlotCategory, Unit, normalize_name};
pub use plan::{DayReport, MealPlan, PlanSlotAssignment, Relaxation, RelaxationKind};
pub use profile::{ActivityLevel, Goal, NutritionProfile, Sex};
