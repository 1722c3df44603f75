use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, CostTier, Goal, NutritionProfile, Sex};
use crate::planner::MAX_PLAN_DAYS;

/// Prompt for a number, mapping parse failures to `InvalidProfile`.
fn prompt_number<T: FromStr>(prompt: &str, default: &str, field: &'static str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::invalid_profile(field, format!("'{}' is not a number", input)))
}

/// Let the user pick one of `options`, shown by their `Display` form.
fn prompt_select<T: Copy + std::fmt::Display>(prompt: &str, options: &[T], default: usize) -> Result<T> {
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection.min(options.len() - 1)])
}

/// Prompt for the plan length.
pub fn prompt_days(default: u32) -> Result<u32> {
    let days: u32 = prompt_number(
        &format!("How many days should the plan cover? (1-{})", MAX_PLAN_DAYS),
        &default.to_string(),
        "days",
    )?;
    Ok(days)
}

/// Collect a full profile interactively. The result is validated.
pub fn collect_profile() -> Result<NutritionProfile> {
    let weight_kg = prompt_number("Body weight (kg)", "75", "weight_kg")?;
    let height_cm = prompt_number("Height (cm)", "175", "height_cm")?;
    let age = prompt_number("Age (years)", "30", "age")?;
    let sex = prompt_select("Sex", &[Sex::Male, Sex::Female], 0)?;
    let activity = prompt_select(
        "Activity level",
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ],
        2,
    )?;
    let goal = prompt_select("Goal", &[Goal::Cut, Goal::Maintain, Goal::Bulk], 1)?;
    let tier = prompt_select(
        "Cost tier",
        &[CostTier::Budget, CostTier::Standard, CostTier::Premium],
        1,
    )?;

    let profile = NutritionProfile {
        weight_kg,
        height_cm,
        age,
        sex,
        activity,
        goal,
        tier,
    };
    profile.validate()?;
    Ok(profile)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
