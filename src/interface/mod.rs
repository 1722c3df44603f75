pub mod prompts;
pub mod render;

pub use prompts::{collect_profile, prompt_days, prompt_yes_no};
pub use render::{
    display_day_reports, display_meal_plan, display_relaxations, display_shopping_list,
    display_targets,
};
