// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — preprocesses a corpus split and caches it
//   2. `inspect` — loads a split and prints summary statistics
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, CorpusArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "word-coref-data",
    version = "0.1.0",
    about = "Convert a word-level coreference corpus into subword-aligned tensor batches."
)]
pub struct Cli {
    /// The subcommand to run (prepare or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use
    /// case. This keeps the CLI layer thin — it only routes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

/// Handles the `prepare` subcommand.
fn run_prepare(args: CorpusArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    let split = args.split.into();
    let use_case = PrepareUseCase::new(args.into());
    let dataset = use_case.execute(split)?;

    println!(
        "Preprocessing complete: {} examples ready, {} filtered by sequence length.",
        dataset.example_count(),
        dataset.num_filtered()
    );
    Ok(())
}

/// Handles the `inspect` subcommand.
fn run_inspect(args: CorpusArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let split = args.split.into();
    let use_case = InspectUseCase::new(args.into());
    let summary = use_case.execute(split)?;

    println!("Split:             {}", summary.split);
    println!("Examples:          {}", summary.example_count);
    println!("Filtered:          {}", summary.num_filtered);
    println!("Max mentions/doc:  {}", summary.maxima.max_mention_num);
    println!("Max cluster size:  {}", summary.maxima.max_cluster_size);
    println!("Max clusters/doc:  {}", summary.maxima.max_num_clusters);
    match summary.length_stats {
        Some((shortest, longest, mean)) => println!(
            "Subtoken lengths:  min {} / max {} / mean {:.1}",
            shortest, longest, mean
        ),
        None => println!("Subtoken lengths:  (empty split)"),
    }
    Ok(())
}
