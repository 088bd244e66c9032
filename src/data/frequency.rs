// ============================================================
// Layer 4 — Frequency Counter
// ============================================================
// Counts how often each distinct item occurs in a sequence.
//
//   ["apple", "orange", "pineapple", "apple"]
//       → {"apple": 2, "orange": 1, "pineapple": 1}
//
// Insertion order does not matter for the counts, so a plain
// hash map is enough. `sorted_counts` gives a stable order for
// printing.
//
// Reference: Rust Book §8.3 (Hash Maps — the entry API)

use std::collections::HashMap;
use std::hash::Hash;

/// The literal list counted by the `count` command by default
pub const DEFAULT_ITEMS: [&str; 4] = ["apple", "orange", "pineapple", "apple"];

/// Count occurrences of each item.
pub fn count_occurrences<I, T>(items: I) -> HashMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Counts ordered by descending count, ties broken alphabetically.
pub fn sorted_counts(counts: &HashMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
