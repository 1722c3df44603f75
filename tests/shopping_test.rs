use std::collections::BTreeMap;

use assert_float_eq::assert_float_absolute_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use macro_meal_planner_rs::catalog::MealCatalog;
use macro_meal_planner_rs::error::PlannerError;
use macro_meal_planner_rs::models::{
    ActivityLevel, CostTier, Goal, Ingredient, Meal, MealPlan, NutritionProfile, Sex,
    SlotCategory, Unit,
};
use macro_meal_planner_rs::packs::{GroceryCategory, MatchKind, PackRegistry, PackSize};
use macro_meal_planner_rs::planner::{PlannerConfig, generate_plan};
use macro_meal_planner_rs::shopping::{aggregate_ingredients, build_shopping_list};

fn profile(tier: CostTier) -> NutritionProfile {
    NutritionProfile {
        weight_kg: 80.0,
        height_cm: 175.0,
        age: 30,
        sex: Sex::Male,
        activity: ActivityLevel::Moderate,
        goal: Goal::Bulk,
        tier,
    }
}

/// One meal per slot, each carrying the given ingredients.
fn one_meal_catalog(ingredients: Vec<Ingredient>) -> MealCatalog {
    let meals = SlotCategory::ALL
        .into_iter()
        .map(|slot| Meal {
            name: format!("{} meal", slot),
            category: slot,
            protein_g: 30.0,
            fat_g: 20.0,
            carbs_g: 60.0,
            cost_tier: CostTier::Budget,
            ingredients: ingredients.clone(),
        })
        .collect();
    MealCatalog::new(meals).unwrap()
}

/// A config that lets the single meal repeat every day.
fn repeat_config() -> PlannerConfig {
    PlannerConfig {
        variety_cap: 7,
        relaxed_variety_cap: 7,
        ..Default::default()
    }
}

fn plan_with(catalog: &MealCatalog, days: u32) -> MealPlan {
    let mut rng = StdRng::seed_from_u64(3);
    generate_plan(&profile(CostTier::Budget), days, catalog, &repeat_config(), &mut rng).unwrap()
}

#[test]
fn test_repeated_meal_contributes_n_times() {
    let catalog = one_meal_catalog(vec![
        Ingredient::new("ориз", 80.0, Unit::Gram),
        Ingredient::new("банан", 1.0, Unit::Piece),
    ]);
    let plan = plan_with(&catalog, 5);
    assert!(plan.relaxations.is_empty());

    let aggregate = aggregate_ingredients(&plan).unwrap();
    // 5 days x 4 slots, every slot uses the same ingredients.
    assert_float_absolute_eq!(aggregate.get("ориз").unwrap().quantity, 1600.0, 1e-9);
    assert_float_absolute_eq!(aggregate.get("банан").unwrap().quantity, 20.0, 1e-9);
}

#[test]
fn test_yogurt_scenario_through_a_plan() {
    let catalog = one_meal_catalog(vec![Ingredient::new("кисело мляко", 32.5, Unit::Gram)]);
    let plan = plan_with(&catalog, 5);

    let list = build_shopping_list(&plan, PackRegistry::builtin()).unwrap();
    let item = list.get("кисело мляко").unwrap();
    assert_float_absolute_eq!(item.quantity, 650.0, 1e-9);
    assert_eq!(item.pack_count, Some(2));
    assert_eq!(item.display, "2 кофички (800г)");
    assert_eq!(item.category, Some(GroceryCategory::Dairy));
}

#[test]
fn test_never_under_buys_builtin_plan() {
    for tier in [CostTier::Budget, CostTier::Standard, CostTier::Premium] {
        let mut rng = StdRng::seed_from_u64(11);
        let plan = generate_plan(
            &profile(tier),
            30,
            MealCatalog::builtin(),
            &PlannerConfig::default(),
            &mut rng,
        )
        .unwrap();

        let aggregate = aggregate_ingredients(&plan).unwrap();
        let list = build_shopping_list(&plan, PackRegistry::builtin()).unwrap();
        assert_eq!(list.len(), aggregate.len());

        for item in list.iter() {
            let needed = aggregate.get(&item.ingredient).unwrap().quantity;
            assert_float_absolute_eq!(item.quantity, needed, 1e-9);
            if let (Some(count), Some(bought)) = (item.pack_count, item.purchased_quantity) {
                assert!(bought >= needed, "{}: {} < {}", item.ingredient, bought, needed);
                let pack = PackRegistry::builtin().lookup(&item.ingredient).unwrap().pack;
                assert!((count as f64 - 1.0) * pack.standard_pack_size < needed);
            }
        }
    }
}

#[test]
fn test_shopping_list_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(8);
    let plan = generate_plan(
        &profile(CostTier::Standard),
        14,
        MealCatalog::builtin(),
        &PlannerConfig::default(),
        &mut rng,
    )
    .unwrap();

    let first = build_shopping_list(&plan, PackRegistry::builtin()).unwrap();
    let second = build_shopping_list(&plan, PackRegistry::builtin()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_loose_produce_passes_through() {
    let catalog = one_meal_catalog(vec![Ingredient::new("домати", 50.0, Unit::Gram)]);
    let plan = plan_with(&catalog, 1);

    let list = build_shopping_list(&plan, PackRegistry::builtin()).unwrap();
    let item = list.get("домати").unwrap();
    assert_eq!(item.pack_count, None);
    assert_eq!(item.display, "200г домати");
}

#[test]
fn test_wholegrain_bread_uses_bread_packs() {
    let found = PackRegistry::builtin().lookup("пълнозърнест хляб").unwrap();
    assert_eq!(found.key, "хляб");
    assert_eq!(found.kind, MatchKind::Contained);
}

#[test]
fn test_custom_registry_unit_mismatch() {
    let mut entries = BTreeMap::new();
    entries.insert(
        "ориз".to_string(),
        PackSize {
            standard_pack_size: 1.0,
            unit: Unit::Piece,
            retail_name: "пакет".to_string(),
            plural_form: "пакета".to_string(),
            discrete: false,
            category: GroceryCategory::Grains,
        },
    );
    let registry = PackRegistry::new(entries).unwrap();

    let catalog = one_meal_catalog(vec![Ingredient::new("ориз", 80.0, Unit::Gram)]);
    let plan = plan_with(&catalog, 1);
    assert!(matches!(
        build_shopping_list(&plan, &registry),
        Err(PlannerError::UnitMismatch { .. })
    ));
}
