use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Meal planner: multi-day plans that hit macro targets within a cost tier,
/// plus a shopping list in retail pack units.
#[derive(Parser, Debug)]
#[command(name = "meal-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log selection details (same as MEAL_PLANNER_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Body metrics and preferences.
///
/// With no metric flags and no `--profile` the profile is asked for
/// interactively. Giving only some of `--weight`, `--height` and `--age`
/// is an error.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Load the profile from a JSON file instead of flags.
    #[arg(long, conflicts_with_all = ["weight", "height", "age"])]
    pub profile: Option<PathBuf>,

    /// Body weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// male | female
    #[arg(long, default_value = "male")]
    pub sex: String,

    /// sedentary | light | moderate | active | very_active
    #[arg(long, default_value = "moderate")]
    pub activity: String,

    /// cut | maintain | bulk
    #[arg(long, default_value = "maintain")]
    pub goal: String,

    /// budget | standard | premium
    #[arg(long, default_value = "standard")]
    pub tier: String,
}

impl ProfileArgs {
    /// True when no metric was given and no profile file either.
    pub fn is_empty(&self) -> bool {
        self.profile.is_none() && self.weight.is_none() && self.height.is_none() && self.age.is_none()
    }
}

/// Optional data and settings files; built-ins are used when absent.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Meal catalog JSON (array of meals).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Pack registry JSON (object keyed by ingredient).
    #[arg(long)]
    pub packs: Option<PathBuf>,

    /// Planner settings JSON.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a plan and its shopping list.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        sources: SourceArgs,

        /// Plan length in days.
        #[arg(short, long)]
        days: Option<u32>,

        /// Seed for tie-breaking; the same seed gives the same plan.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Save the plan as JSON.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the daily and per-slot macro targets for a profile.
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Planner settings JSON.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the shopping list of a saved plan.
    Shopping {
        /// Plan JSON written by `plan --output`.
        plan: PathBuf,

        /// Pack registry JSON.
        #[arg(long)]
        packs: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: ProfileArgs::default(),
            sources: SourceArgs::default(),
            days: None,
            seed: 42,
            output: None,
        }
    }
}
