// ============================================================
// Layer 5 — Pre-Annotated Pipeline
// ============================================================
// Reads annotations that an external tagger has already
// produced, so the token filter can run on real model output
// instead of the built-in rules.
//
// File format: JSON Lines, one document per line, line i for
// dataset row i:
//
//   {"tokens":[{"text":"Enron","lemma":"Enron","is_punct":false,
//               "is_stop":false,"is_space":false,"ent_type":"ORG"}, ...]}
//
// Missing flags default to false and a missing ent_type to "".
// Blank lines are ignored.
//
// Reference: serde_json documentation

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::domain::token::AnnotatedDoc;
use crate::domain::traits::NlpPipeline;

pub struct PreAnnotatedPipeline {
    path: PathBuf,
}

impl PreAnnotatedPipeline {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse every document in the annotation file.
    pub fn read_docs(&self) -> Result<Vec<AnnotatedDoc>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open annotations '{}'", self.path.display()))?;

        let mut docs = Vec::new();
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| {
                format!("Cannot read line {} of '{}'", line_no + 1, self.path.display())
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let doc: AnnotatedDoc = serde_json::from_str(&line).with_context(|| {
                format!("Invalid annotation on line {} of '{}'", line_no + 1, self.path.display())
            })?;
            docs.push(doc);
        }

        Ok(docs)
    }
}

impl NlpPipeline for PreAnnotatedPipeline {
    fn pipe(&self, texts: &[String]) -> Result<Vec<AnnotatedDoc>> {
        let docs = self.read_docs()?;

        if docs.len() != texts.len() {
            bail!(
                "Annotation file '{}' has {} documents but the dataset has {} rows",
                self.path.display(),
                docs.len(),
                texts.len()
            );
        }

        tracing::info!("Read {} annotated documents from '{}'", docs.len(), self.path.display());
        Ok(docs)
    }

    fn name(&self) -> &str {
        "pre-annotated"
    }
}
