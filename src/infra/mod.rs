// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Files the tool reads and writes besides the input dataset:
//
//   stopword_store.rs — Stopword list cache
//                       Writes the bundled stopword list to the
//                       cache directory on first use and reads
//                       it back on later runs, or reads a
//                       user-supplied word list.
//
//   row_writer.rs     — Augmented row output
//                       Writes rows with their lemmas and ent
//                       columns as JSON Lines.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Stopword list caching and loading
pub mod stopword_store;

/// JSON Lines writer for augmented rows
pub mod row_writer;
