use crate::models::{MealPlan, SlotCategory};
use crate::planner::PlanTargets;
use crate::shopping::ShoppingList;

/// Relative deviation in percent, or 0 for a zero target.
fn pct_off(realized: f64, target: f64) -> f64 {
    if target.abs() < f64::EPSILON {
        0.0
    } else {
        (realized - target) / target * 100.0
    }
}

/// Display the daily target and its per-slot split.
pub fn display_targets(targets: &PlanTargets) {
    let d = &targets.daily;
    println!();
    println!("=== Daily Target ===");
    println!(
        "{:.0} kcal | P {:.1} g  F {:.1} g  C {:.1} g",
        d.calories, d.protein_g, d.fat_g, d.carbs_g
    );
    println!();

    for slot in SlotCategory::ALL {
        let t = targets.slot(slot);
        println!(
            "  {:<10} {:>5.0} kcal | P {:>5.1}  F {:>5.1}  C {:>5.1}",
            slot, t.calories, t.protein_g, t.fat_g, t.carbs_g
        );
    }
    println!();
}

/// Display every day of the plan with its slot assignments.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.assignments.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    println!();
    println!("=== Meal Plan ({} days, {} tier) ===", plan.days, plan.tier);

    let max_name_len = plan
        .assignments
        .iter()
        .map(|a| a.meal_name().chars().count())
        .max()
        .unwrap_or(10);

    for day in 1..=plan.days {
        println!();
        println!("Day {}", day);
        for a in plan.assignments_for_day(day) {
            let m = a.macros();
            println!(
                "  {:<10} {:<width$}  {:>4.0} kcal | P {:>5.1}  F {:>5.1}  C {:>5.1}  [{}]",
                a.slot,
                a.meal_name(),
                m.calories(),
                m.protein_g,
                m.fat_g,
                m.carbs_g,
                a.meal.cost_tier,
                width = max_name_len
            );
        }
    }
    println!();
}

/// Display realized vs. target macros per day plus the plan average.
pub fn display_day_reports(plan: &MealPlan) {
    if plan.day_reports.is_empty() {
        return;
    }

    println!("--- Daily Report ---");
    for r in &plan.day_reports {
        println!(
            "Day {:>2}: {:>5.0} kcal | P {:>+6.1}%  F {:>+6.1}%  C {:>+6.1}% | off by {:.1} g",
            r.day,
            r.realized_calories(),
            pct_off(r.realized.protein_g, r.target.protein_g),
            pct_off(r.realized.fat_g, r.target.fat_g),
            pct_off(r.realized.carbs_g, r.target.carbs_g),
            r.slot_deviation
        );
    }

    let avg = plan.realized_daily_average();
    let t = &plan.daily_target;
    println!();
    println!(
        "Average: {:.0} kcal (target {:.0}) | P {:.1}/{:.1}  F {:.1}/{:.1}  C {:.1}/{:.1}",
        avg.calories(),
        t.calories,
        avg.protein_g,
        t.protein_g,
        avg.fat_g,
        t.fat_g,
        avg.carbs_g,
        t.carbs_g
    );
    println!();
}

/// Display every constraint relaxation the assembler applied.
pub fn display_relaxations(plan: &MealPlan) {
    if plan.relaxations.is_empty() {
        println!("All slots filled without relaxing any constraint.");
        println!();
        return;
    }

    println!("--- Relaxations ({}) ---", plan.relaxations.len());
    for r in &plan.relaxations {
        println!("  {}", r);
    }
    println!();
}

/// Display the shopping list grouped by store aisle.
pub fn display_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    println!("=== Shopping List ({} items) ===", list.len());
    for (category, items) in list.grouped() {
        println!();
        println!("[{}]", category);
        for item in items {
            println!("  {:<20} {}", item.ingredient, item.display);
        }
    }
    println!();
}
