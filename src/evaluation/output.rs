use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::evaluation::trials::ComparisonSummary;

/// Round to `decimals` places for stable, readable output.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// One CSV row per trial.
pub fn write_csv(summary: &ComparisonSummary, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "trial",
        "seed",
        "greedy_deviation",
        "random_deviation",
        "greedy_mean_slot_deviation",
        "random_mean_slot_deviation",
        "greedy_max_window_uses",
        "random_max_window_uses",
        "greedy_relaxations",
    ])?;

    for (i, trial) in summary.per_trial.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            trial.seed.to_string(),
            format!("{:.2}", trial.greedy.total_deviation),
            format!("{:.2}", trial.random.total_deviation),
            format!("{:.2}", trial.greedy.mean_slot_deviation),
            format!("{:.2}", trial.random.mean_slot_deviation),
            trial.greedy.max_window_uses.to_string(),
            trial.random.max_window_uses.to_string(),
            trial.greedy.relaxations.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Aggregate metrics as pretty JSON.
pub fn write_summary_json(summary: &ComparisonSummary, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "trials": summary.trials,
        "days": summary.days,
        "avg_greedy_deviation": truncate(summary.avg_greedy_deviation, 2),
        "avg_random_deviation": truncate(summary.avg_random_deviation, 2),
        "improvement_pct": truncate(summary.improvement_pct(), 2),
        "greedy_wins": summary.greedy_wins,
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

pub fn print_summary(summary: &ComparisonSummary) {
    println!("\n=== Greedy vs Random ({} trials, {} days) ===\n", summary.trials, summary.days);
    println!("Greedy avg deviation: {:>9.1} g", summary.avg_greedy_deviation);
    println!("Random avg deviation: {:>9.1} g", summary.avg_random_deviation);
    println!("Improvement:          {:>+9.1} %", summary.improvement_pct());
    println!("Greedy wins:          {:>9} / {}", summary.greedy_wins, summary.trials);
    println!();
}
