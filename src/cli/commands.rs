// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `prepare` and `inspect`, and
// their configurable flags. Both operate on the same corpus
// configuration, so they share one args struct.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → i64, enum, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::prepare_use_case::{PrepareConfig, Split};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preprocess a corpus split and cache the result
    Prepare(CorpusArgs),

    /// Load a split and print summary statistics
    Inspect(CorpusArgs),
}

/// Which split a command operates on
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SplitArg {
    Train,
    Predict,
}

/// Convert the clap enum into the application-layer Split —
/// the application layer never sees clap types.
impl From<SplitArg> for Split {
    fn from(s: SplitArg) -> Self {
        match s {
            SplitArg::Train => Split::Train,
            SplitArg::Predict => Split::Predict,
        }
    }
}

/// Corpus configuration shared by `prepare` and `inspect`.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Which split to operate on
    #[arg(long, value_enum, default_value_t = SplitArg::Train)]
    pub split: SplitArg,

    /// Training corpus in JSON-lines format
    #[arg(long, default_value = "data/train.jsonlines")]
    pub train_file: String,

    /// Cache file for the preprocessed training split
    #[arg(long, default_value = "data/cache/train.json")]
    pub train_file_cache: String,

    /// Prediction/evaluation corpus in JSON-lines format
    #[arg(long, default_value = "data/dev.jsonlines")]
    pub predict_file: String,

    /// Cache file for the preprocessed prediction split
    #[arg(long, default_value = "data/cache/dev.json")]
    pub predict_file_cache: String,

    /// HuggingFace tokenizer.json to tokenize words with
    #[arg(long, default_value = "tokenizer.json")]
    pub tokenizer_path: String,

    /// Drop documents with more subtokens than this;
    /// zero or negative keeps every document
    #[arg(long, default_value_t = 4096)]
    pub max_seq_length: i64,
}

/// Convert CLI args into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2.
impl From<CorpusArgs> for PrepareConfig {
    fn from(a: CorpusArgs) -> Self {
        PrepareConfig {
            train_file: a.train_file,
            train_file_cache: a.train_file_cache,
            predict_file: a.predict_file,
            predict_file_cache: a.predict_file_cache,
            tokenizer_path: a.tokenizer_path,
            max_seq_length: a.max_seq_length,
        }
    }
}
