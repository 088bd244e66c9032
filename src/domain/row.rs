// ============================================================
// Layer 3 — Dataset Domain Types
// ============================================================
// A dataset is the in-memory form of the input file:
//
//   index,text,label,...      ← header row
//   0,"Subject: hi ...",ham   ← one DatasetRow per record
//
// Each row keeps every original column. The pipeline then
// adds two derived columns in place:
//   lemmas → filtered lemma forms of the message tokens
//   ent    → filtered ORG entity mentions
//
// A row serialises flat, extra columns next to the fixed ones,
// so no extra column may reuse a name from RESERVED_COLUMNS.
//
// Rows are never written back to the input file.
//
// Reference: Rust Book §5 (Structs), §8 (Collections)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field names of a serialised row. An input column with one of
/// these names is replaced by the row's own field.
pub const RESERVED_COLUMNS: [&str; 5] = ["index", "text", "label", "lemmas", "ent"];

/// One record of the dataset plus its derived columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Value of the first column, used as the row index
    pub index: String,

    /// The message body
    pub text: String,

    /// Class label, e.g. "ham" or "spam"
    pub label: String,

    /// Every other original column, by header name
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,

    /// Derived: filtered lemmas
    #[serde(default)]
    pub lemmas: Vec<String>,

    /// Derived: filtered ORG mentions (surface text)
    #[serde(default)]
    pub ent: Vec<String>,
}

impl DatasetRow {
    pub fn new(
        index: impl Into<String>,
        text: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            text: text.into(),
            label: label.into(),
            ..Self::default()
        }
    }
}

/// A loaded dataset: rows in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub rows: Vec<DatasetRow>,
}

impl Dataset {
    pub fn new(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Message bodies in row order, the input of an NLP pipeline
    pub fn texts(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.text.clone()).collect()
    }
}
