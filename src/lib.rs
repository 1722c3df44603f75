pub mod catalog;
pub mod cli;
pub mod error;
pub mod evaluation;
pub mod interface;
pub mod logging;
pub mod models;
pub mod packs;
pub mod planner;
pub mod shopping;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{Meal, MealPlan, NutritionProfile};
