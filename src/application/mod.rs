// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal per command.
//
// Rules for this layer:
//   - No tokenising, lemmatising or filtering here
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load, annotate, derive columns, select by label
pub mod prepare_use_case;

// Count occurrences in a list of items
pub mod count_use_case;
