// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the dataset preparation pipeline in order:
//
//   Step 1: Load the dataset             (Layer 4 - data)
//   Step 2: Build the NLP pipeline       (Layer 5 - nlp, Layer 6 - infra)
//   Step 3: Annotate every message       (Layer 5 - nlp)
//   Step 4: Derive lemmas / ent columns  (Layer 4 - data)
//   Step 5: Select rows by label         (Layer 4 - data)
//   Step 6: Write augmented rows         (Layer 6 - infra, optional)
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::path::Path;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::CsvDatasetLoader,
    selector::rows_with_label,
    token_filter::TokenFilter,
};
use crate::domain::row::Dataset;
use crate::domain::traits::{DatasetSource, NlpPipeline};
use crate::infra::{row_writer::RowWriter, stopword_store::StopwordStore};
use crate::nlp::{
    annotated::PreAnnotatedPipeline,
    entities::OrgRecognizer,
    pipeline::RuleBasedPipeline,
};

// ─── Preparation Configuration ───────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Delimited input file, first column is the row index
    pub dataset: String,
    /// Label whose rows are selected (exact match)
    pub label: String,
    pub delimiter: char,
    /// Language of the bundled stopword list
    pub language: String,
    /// Word list used instead of the cached stopwords
    pub stopwords: Option<String>,
    /// Extra organization names, one per line
    pub orgs: Option<String>,
    /// JSON Lines annotations from an external tagger
    pub annotations: Option<String>,
    pub cache_dir: String,
    /// JSON Lines output for the augmented rows
    pub output: Option<String>,
    /// Only write the rows matching `label`
    pub label_only: bool,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            dataset: "spam_dataset.csv".to_string(),
            label: "ham".to_string(),
            delimiter: ',',
            language: "en".to_string(),
            stopwords: None,
            orgs: None,
            annotations: None,
            cache_dir: ".cache/spam-text-prep".to_string(),
            output: None,
            label_only: false,
        }
    }
}

// ─── Preparation Report ──────────────────────────────────────────────────────
/// What a run produced, for the CLI to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrepareReport {
    pub pipeline: String,
    pub total_rows: usize,
    pub label: String,
    pub label_rows: usize,
    pub lemma_count: usize,
    pub org_mention_count: usize,
    pub written_rows: Option<usize>,
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Run the whole preparation and return the augmented dataset
    /// together with a summary.
    pub fn execute(&self) -> Result<(Dataset, PrepareReport)> {
        let cfg = &self.config;

        // ── Step 1: Load the dataset ──────────────────────────────────────────
        if !cfg.delimiter.is_ascii() {
            bail!("Delimiter '{}' must be a single ASCII character", cfg.delimiter);
        }
        tracing::info!("Loading dataset from '{}'", cfg.dataset);
        let loader = CsvDatasetLoader::new(&cfg.dataset).with_delimiter(cfg.delimiter as u8);
        let mut dataset = loader.load()?;
        if dataset.is_empty() {
            tracing::warn!("Dataset '{}' has a header but no rows", cfg.dataset);
        }

        // ── Step 2: Build the NLP pipeline ────────────────────────────────────
        let pipeline = self.build_pipeline()?;
        tracing::info!("Annotating {} messages with the {} pipeline", dataset.len(), pipeline.name());

        // ── Step 3: Annotate every message ────────────────────────────────────
        let docs = pipeline.pipe(&dataset.texts())?;
        if docs.len() != dataset.len() {
            bail!(
                "Pipeline returned {} documents for {} rows",
                docs.len(),
                dataset.len()
            );
        }

        // ── Step 4: Derive the lemmas and ent columns ─────────────────────────
        let filter = TokenFilter::default();
        filter.derive_columns(&mut dataset.rows, &docs);

        let lemma_count: usize = dataset.rows.iter().map(|r| r.lemmas.len()).sum();
        let org_mention_count: usize = dataset.rows.iter().map(|r| r.ent.len()).sum();
        tracing::info!(
            "Derived {} lemmas and {} ORG mentions",
            lemma_count,
            org_mention_count
        );

        // ── Step 5: Select rows by label ──────────────────────────────────────
        let selected = rows_with_label(&dataset, &cfg.label);
        tracing::info!("{} of {} rows are labelled '{}'", selected.len(), dataset.len(), cfg.label);

        // ── Step 6: Write augmented rows ──────────────────────────────────────
        let written_rows = match &cfg.output {
            Some(path) => {
                let writer = RowWriter::new(path);
                let written = if cfg.label_only {
                    writer.write(selected.iter().copied())?
                } else {
                    writer.write(&dataset.rows)?
                };
                tracing::info!("Wrote {} rows to '{}'", written, path);
                Some(written)
            }
            None => None,
        };

        let report = PrepareReport {
            pipeline: pipeline.name().to_string(),
            total_rows: dataset.len(),
            label: cfg.label.clone(),
            label_rows: selected.len(),
            lemma_count,
            org_mention_count,
            written_rows,
        };

        Ok((dataset, report))
    }

    /// Pre-annotated input wins over the built-in rules; the
    /// stopword list and gazetteer only matter for the latter.
    fn build_pipeline(&self) -> Result<Box<dyn NlpPipeline>> {
        let cfg = &self.config;

        if let Some(path) = &cfg.annotations {
            return Ok(Box::new(PreAnnotatedPipeline::new(path)));
        }

        let stopwords = match &cfg.stopwords {
            Some(path) => StopwordStore::load_file(Path::new(path))?,
            None => StopwordStore::new(&cfg.cache_dir).load_or_build(&cfg.language)?,
        };

        let mut orgs = OrgRecognizer::new();
        if let Some(path) = &cfg.orgs {
            orgs.load_names(Path::new(path))?;
        }

        Ok(Box::new(RuleBasedPipeline::new(stopwords, orgs)))
    }
}
