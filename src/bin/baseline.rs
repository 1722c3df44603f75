use std::path::PathBuf;

use clap::Parser;

use macro_meal_planner_rs::catalog::MealCatalog;
use macro_meal_planner_rs::error::Result;
use macro_meal_planner_rs::evaluation::{
    TrialConfig, compare_selectors, print_summary, write_csv, write_summary_json,
};
use macro_meal_planner_rs::logging;
use macro_meal_planner_rs::models::{ActivityLevel, CostTier, Goal, NutritionProfile, Sex};
use macro_meal_planner_rs::planner::PlannerConfig;
use macro_meal_planner_rs::state::{load_catalog, load_config, load_profile};

#[derive(Parser, Debug)]
#[command(name = "baseline")]
#[command(about = "Compare the greedy planner against uniformly random meal selection")]
struct Args {
    /// Number of seeded trials
    #[arg(long, default_value = "50")]
    trials: usize,

    /// First seed; trial i uses seed + i
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Plan length per trial
    #[arg(long, default_value = "7")]
    days: u32,

    /// Profile JSON (defaults to an 80 kg, 175 cm, 30 y moderate bulk on standard tier)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Meal catalog JSON
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Planner settings JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSV file with one row per trial
    #[arg(long, default_value = "baseline_trials.csv")]
    csv: PathBuf,

    /// Output JSON file with the summary
    #[arg(long, default_value = "baseline_summary.json")]
    json: PathBuf,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn reference_profile() -> NutritionProfile {
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

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let profile = match &args.profile {
        Some(path) => load_profile(path)?,
        None => reference_profile(),
    };
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };

    let loaded_catalog;
    let catalog = match &args.catalog {
        Some(path) => {
            loaded_catalog = load_catalog(path)?;
            &loaded_catalog
        }
        None => MealCatalog::builtin(),
    };

    println!(
        "Running {} trials of {} days over {} meals ({} goal, {} tier)",
        args.trials,
        args.days,
        catalog.len(),
        profile.goal,
        profile.tier
    );

    let trial_config = TrialConfig {
        trials: args.trials,
        seed: args.seed,
        days: args.days,
    };
    let summary = compare_selectors(&profile, catalog, &config, &trial_config)?;

    print_summary(&summary);

    write_csv(&summary, &args.csv)?;
    println!("Wrote per-trial results to {:?}", args.csv);

    write_summary_json(&summary, &args.json)?;
    println!("Wrote summary to {:?}", args.json);

    Ok(())
}
