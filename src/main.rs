use std::path::{Path, PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use macro_meal_planner_rs::catalog::MealCatalog;
use macro_meal_planner_rs::cli::{Cli, Command, ProfileArgs, SourceArgs};
use macro_meal_planner_rs::error::{PlannerError, Result};
use macro_meal_planner_rs::interface::{
    collect_profile, display_day_reports, display_meal_plan, display_relaxations,
    display_shopping_list, display_targets, prompt_days, prompt_yes_no,
};
use macro_meal_planner_rs::logging;
use macro_meal_planner_rs::models::NutritionProfile;
use macro_meal_planner_rs::packs::PackRegistry;
use macro_meal_planner_rs::planner::{
    DEFAULT_PLAN_DAYS, PlannerConfig, calculate_targets, generate_plan,
};
use macro_meal_planner_rs::shopping::build_shopping_list;
use macro_meal_planner_rs::state::{
    load_catalog, load_config, load_pack_registry, load_plan, load_profile, save_plan,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.unwrap_or_default() {
        Command::Plan {
            profile,
            sources,
            days,
            seed,
            output,
        } => cmd_plan(&profile, &sources, days, seed, output.as_deref()),
        Command::Targets { profile, config } => cmd_targets(&profile, config.as_deref()),
        Command::Shopping { plan, packs } => cmd_shopping(&plan, packs.as_deref()),
    }
}

/// Build the profile from a file, from flags, or interactively.
fn resolve_profile(args: &ProfileArgs) -> Result<NutritionProfile> {
    if let Some(path) = &args.profile {
        return load_profile(path);
    }
    if args.is_empty() {
        return collect_profile();
    }

    let profile = NutritionProfile {
        weight_kg: args
            .weight
            .ok_or_else(|| PlannerError::invalid_profile("weight_kg", "missing --weight"))?,
        height_cm: args
            .height
            .ok_or_else(|| PlannerError::invalid_profile("height_cm", "missing --height"))?,
        age: args
            .age
            .ok_or_else(|| PlannerError::invalid_profile("age", "missing --age"))?,
        sex: args.sex.parse()?,
        activity: args.activity.parse()?,
        goal: args.goal.parse()?,
        tier: args.tier.parse()?,
    };
    profile.validate()?;
    Ok(profile)
}

fn resolve_config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(PlannerConfig::default()),
    }
}

/// Generate a plan, print it with its shopping list and optionally save it.
fn cmd_plan(
    profile_args: &ProfileArgs,
    sources: &SourceArgs,
    days: Option<u32>,
    seed: u64,
    output: Option<&Path>,
) -> Result<()> {
    let interactive = profile_args.is_empty();
    let profile = resolve_profile(profile_args)?;
    let config = resolve_config(sources.config.as_deref())?;

    let loaded_catalog;
    let catalog = match &sources.catalog {
        Some(path) => {
            loaded_catalog = load_catalog(path)?;
            &loaded_catalog
        }
        None => MealCatalog::builtin(),
    };

    let loaded_registry;
    let registry = match &sources.packs {
        Some(path) => {
            loaded_registry = load_pack_registry(path)?;
            &loaded_registry
        }
        None => PackRegistry::builtin(),
    };

    let days = match days {
        Some(days) => days,
        None if interactive => prompt_days(DEFAULT_PLAN_DAYS)?,
        None => DEFAULT_PLAN_DAYS,
    };

    println!("Loaded {} meals, {} pack sizes", catalog.len(), registry.len());

    let mut rng = StdRng::seed_from_u64(seed);
    let plan = generate_plan(&profile, days, catalog, &config, &mut rng)?;
    let shopping = build_shopping_list(&plan, registry)?;

    display_meal_plan(&plan);
    display_day_reports(&plan);
    display_relaxations(&plan);
    display_shopping_list(&shopping);

    let save_to: Option<PathBuf> = match output {
        Some(path) => Some(path.to_path_buf()),
        None if interactive => prompt_yes_no("Save plan to meal_plan.json?", false)?
            .then(|| PathBuf::from("meal_plan.json")),
        None => None,
    };
    if let Some(path) = save_to {
        save_plan(&path, &plan)?;
        println!("Plan saved to {}.", path.display());
    }

    Ok(())
}

/// Print the daily and per-slot targets.
fn cmd_targets(profile_args: &ProfileArgs, config: Option<&Path>) -> Result<()> {
    let profile = resolve_profile(profile_args)?;
    let config = resolve_config(config)?;
    let targets = calculate_targets(&profile, &config)?;
    display_targets(&targets);
    Ok(())
}

/// Rebuild the shopping list of a saved plan.
fn cmd_shopping(plan_path: &Path, packs: Option<&Path>) -> Result<()> {
    let plan = load_plan(plan_path)?;

    let loaded_registry;
    let registry = match packs {
        Some(path) => {
            loaded_registry = load_pack_registry(path)?;
            &loaded_registry
        }
        None => PackRegistry::builtin(),
    };

    println!("Plan: {} days, {} meals", plan.days, plan.assignments.len());
    let shopping = build_shopping_list(&plan, registry)?;
    display_shopping_list(&shopping);
    Ok(())
}
