// ============================================================
// Layer 5 — NLP Layer
// ============================================================
// Everything that turns raw text into annotated tokens lives
// here. No other layer tokenizes, lemmatizes or tags.
//
//   tokenizer.rs  — UAX #29 word segmentation, contraction
//                   splitting, whitespace tokens, word shapes
//
//   stopwords.rs  — case-insensitive stopword sets backed by
//                   the stop-words crate
//
//   lemmatizer.rs — exception table + suffix rules
//
//   entities.rs   — ORG tagging from a gazetteer and
//                   corporate designators
//
//   pipeline.rs   — RuleBasedPipeline, wires the above into
//                   the NlpPipeline trait
//
//   annotated.rs  — PreAnnotatedPipeline, reads annotations
//                   produced by an external tagger
//
// Reference: Rust Book §7 (Modules)

pub mod tokenizer;

pub mod stopwords;

pub mod lemmatizer;

pub mod entities;

pub mod pipeline;

pub mod annotated;
