pub mod output;
pub mod random;
pub mod trials;

pub use output::{print_summary, write_csv, write_summary_json};
pub use random::assemble_random;
pub use trials::{ComparisonSummary, PlanMetrics, TrialConfig, TrialResult, compare_selectors};
