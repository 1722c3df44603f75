use std::collections::HashMap;

use crate::models::MealKey;

/// Request-scoped record of which day each meal was used on.
///
/// Days are appended in non-decreasing order as the assembler walks forward.
#[derive(Debug, Clone)]
pub struct UsageHistory {
    uses: HashMap<MealKey, Vec<u32>>,
    window_days: u32,
}

impl UsageHistory {
    pub fn new(window_days: u32) -> Self {
        Self {
            uses: HashMap::new(),
            window_days: window_days.max(1),
        }
    }

    pub fn record(&mut self, key: MealKey, day: u32) {
        self.uses.entry(key).or_default().push(day);
    }

    /// Uses on days `max(1, day - (window - 1))..=day - 1`.
    pub fn uses_before(&self, key: &MealKey, day: u32) -> u32 {
        let first = day.saturating_sub(self.window_days - 1).max(1);
        self.uses
            .get(key)
            .map(|days| days.iter().filter(|&&d| d >= first && d < day).count() as u32)
            .unwrap_or(0)
    }

    pub fn last_used(&self, key: &MealKey) -> Option<u32> {
        self.uses.get(key).and_then(|days| days.last().copied())
    }
}
