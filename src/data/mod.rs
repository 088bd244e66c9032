// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the input file and the derived columns
// that is not NLP:
//
//   delimited file
//       │
//       ▼
//   CsvDatasetLoader  → Dataset (index, text, label, extras)
//       │
//       │   ... annotated by Layer 5 ...
//       ▼
//   TokenFilter       → lemmas / ent columns on every row
//       │
//       ▼
//   rows_with_label   → the rows of one class ("ham")
//
// The frequency counter sits beside the pipeline; it counts a
// list of items and never touches the dataset.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads delimited files using the csv crate
pub mod loader;

/// Keep predicate and the lemmas / ent derivations
pub mod token_filter;

/// Exact-match selection of rows by label
pub mod selector;

/// Occurrence counts over a list of items
pub mod frequency;
