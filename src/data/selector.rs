// ============================================================
// Layer 4 — Label Selector
// ============================================================
// Picks the rows of a dataset that carry a given class label.
//
// Matching is exact: "ham" does not match "Ham", " ham" or
// "hamlet". Labels are compared byte for byte.

use crate::domain::row::{Dataset, DatasetRow};

/// Rows whose label equals `label` exactly, in dataset order.
pub fn rows_with_label<'a>(dataset: &'a Dataset, label: &str) -> Vec<&'a DatasetRow> {
    dataset.rows.iter().filter(|r| r.label == label).collect()
}
