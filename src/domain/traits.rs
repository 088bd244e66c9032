// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two external collaborators of the system are expressed
// as traits so the application layer never depends on a
// concrete file format or NLP implementation:
//
//   DatasetSource → CsvDatasetLoader (delimited files)
//   NlpPipeline   → RuleBasedPipeline (built-in English rules)
//                 → PreAnnotatedPipeline (JSON Lines produced
//                   by an external tagger)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use anyhow::Result;

use crate::domain::row::Dataset;
use crate::domain::token::AnnotatedDoc;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can load a labelled text dataset.
pub trait DatasetSource {
    /// Load every row, in source order.
    fn load(&self) -> Result<Dataset>;
}

// ─── NlpPipeline ──────────────────────────────────────────────────────────────
/// Any component that turns raw texts into annotated documents.
///
/// Implementations must return exactly one document per input
/// text, in the same order.
pub trait NlpPipeline {
    /// Annotate a batch of texts.
    fn pipe(&self, texts: &[String]) -> Result<Vec<AnnotatedDoc>>;

    /// Short name used in log lines
    fn name(&self) -> &str;
}
