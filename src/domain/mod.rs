// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define the core
// concepts of the system: dataset rows and annotated tokens.
//
// Rules for this layer:
//   - NO csv or serde_json calls
//   - NO file I/O
//   - NO tokenisation or lemmatisation logic
//
// Everything else in the crate either produces these types
// (loader, pipelines) or consumes them (token filter, writer).
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A dataset loaded from a delimited file
pub mod row;

// Tokens and documents produced by an NLP pipeline
pub mod token;

// Core abstractions (traits) that other layers implement
pub mod traits;
