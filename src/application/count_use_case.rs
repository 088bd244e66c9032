// ============================================================
// Layer 2 — CountUseCase
// ============================================================
// Counts how often each item of a list occurs. With no items
// configured it counts the fixed list
//   ["apple", "orange", "pineapple", "apple"]
//
// The counts are not connected to any dataset.

use serde::{Deserialize, Serialize};

use crate::data::frequency::{count_occurrences, sorted_counts, DEFAULT_ITEMS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountConfig {
    pub items: Vec<String>,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub struct CountUseCase {
    config: CountConfig,
}

impl CountUseCase {
    pub fn new(config: CountConfig) -> Self {
        Self { config }
    }

    /// Counts sorted by descending count, then alphabetically
    pub fn execute(&self) -> Vec<(String, usize)> {
        let counts = count_occurrences(self.config.items.iter().cloned());
        tracing::debug!(
            "Counted {} items, {} distinct",
            self.config.items.len(),
            counts.len()
        );

        sorted_counts(&counts)
            .into_iter()
            .map(|(item, n)| (item.to_string(), n))
            .collect()
    }
}
