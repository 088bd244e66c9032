// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `prepare` and `count`, and all
// their flags.
//
// clap's derive macros generate --help text, errors for
// missing arguments and type conversion.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::count_use_case::CountConfig;
use crate::application::prepare_use_case::PrepareConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a labelled dataset, derive lemmas and ORG mentions, select rows by label
    Prepare(PrepareArgs),

    /// Count occurrences of items in a list
    Count(CountArgs),
}

/// All arguments for the `prepare` command
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Delimited file with `text` and `label` columns; the first
    /// column is the row index
    #[arg(long)]
    pub dataset: String,

    /// Rows with exactly this label are selected
    #[arg(long, default_value = "ham")]
    pub label: String,

    /// Field delimiter of the dataset
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Language of the bundled stopword list
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Stopword list to use instead of the cached one (one word per line)
    #[arg(long)]
    pub stopwords: Option<String>,

    /// Extra organization names for ORG tagging (one per line)
    #[arg(long)]
    pub orgs: Option<String>,

    /// JSON Lines token annotations to use instead of the built-in pipeline
    #[arg(long)]
    pub annotations: Option<String>,

    /// Where the stopword list is cached
    #[arg(long, default_value = ".cache/spam-text-prep")]
    pub cache_dir: String,

    /// Write the augmented rows to this JSON Lines file
    #[arg(long)]
    pub output: Option<String>,

    /// With --output, only write the rows matching --label
    #[arg(long)]
    pub label_only: bool,
}

/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            dataset:     a.dataset,
            label:       a.label,
            delimiter:   a.delimiter,
            language:    a.language,
            stopwords:   a.stopwords,
            orgs:        a.orgs,
            annotations: a.annotations,
            cache_dir:   a.cache_dir,
            output:      a.output,
            label_only:  a.label_only,
        }
    }
}

/// All arguments for the `count` command
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Item to count; repeat the flag for more. Without any,
    /// counts apple, orange, pineapple, apple.
    #[arg(long = "item")]
    pub items: Vec<String>,
}

impl From<CountArgs> for CountConfig {
    fn from(a: CountArgs) -> Self {
        if a.items.is_empty() {
            CountConfig::default()
        } else {
            CountConfig { items: a.items }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_count_args_use_default_list() {
        let config = CountConfig::from(CountArgs { items: Vec::new() });
        assert_eq!(config.items, vec!["apple", "orange", "pineapple", "apple"]);
    }
}
