//! Log output for the binaries. Library code only emits `tracing` events.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MEAL_PLANNER_LOG=debug`.
pub const LOG_ENV: &str = "MEAL_PLANNER_LOG";

static INIT: Once = Once::new();

/// Filter used when the environment does not set one.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "macro_meal_planner_rs=debug"
    } else {
        "macro_meal_planner_rs=warn"
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
///
/// `MEAL_PLANNER_LOG` wins over `verbose` when set and valid.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_level() {
        assert!(default_directive(true).ends_with("debug"));
        assert!(default_directive(false).ends_with("warn"));
    }
}
