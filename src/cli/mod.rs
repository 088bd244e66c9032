// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and delegates everything else to Layer 2.
//
//   1. `prepare` — load, annotate, derive, select
//   2. `count`   — count items in a list
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, CountArgs, PrepareArgs};

#[derive(Parser, Debug)]
#[command(
    name = "spam-text-prep",
    version,
    about = "Lemmatize a spam/ham message dataset and extract ORG mentions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route to the matching use case. Never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Count(args) => run_count(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    tracing::info!("Preparing dataset '{}'", args.dataset);

    let use_case = PrepareUseCase::new(args.into());
    let (_, report) = use_case.execute()?;

    println!("Pipeline:      {}", report.pipeline);
    println!("Rows:          {}", report.total_rows);
    println!("Label '{}':    {}", report.label, report.label_rows);
    println!("Lemmas:        {}", report.lemma_count);
    println!("ORG mentions:  {}", report.org_mention_count);
    if let Some(written) = report.written_rows {
        println!("Rows written:  {}", written);
    }
    Ok(())
}

fn run_count(args: CountArgs) -> Result<()> {
    use crate::application::count_use_case::CountUseCase;

    let counts = CountUseCase::new(args.into()).execute();
    for (item, n) in counts {
        println!("{item}: {n}");
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_prepare_with_defaults() {
        let cli = Cli::try_parse_from(["spam-text-prep", "prepare", "--dataset", "data.csv"]).unwrap();
        match cli.command {
            Commands::Prepare(args) => {
                assert_eq!(args.dataset, "data.csv");
                assert_eq!(args.label, "ham");
                assert_eq!(args.delimiter, ',');
                assert!(!args.label_only);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parses_repeated_items() {
        let cli = Cli::try_parse_from(["spam-text-prep", "count", "--item", "a", "--item", "b"]).unwrap();
        match cli.command {
            Commands::Count(args) => assert_eq!(args.items, vec!["a", "b"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_prepare_requires_dataset() {
        assert!(Cli::try_parse_from(["spam-text-prep", "prepare"]).is_err());
    }
}
