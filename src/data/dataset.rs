// ============================================================
// Layer 4 — Coreference Dataset
// ============================================================
// Ties the parser and aligner together into the collection the
// training loop consumes. The whole thing is materialized once
// per corpus load and is read-only afterwards: examples,
// per-example subtoken lengths (used for length-aware batch
// sampling), the corpus maxima (global padding targets), and
// the count of length-filtered documents.
//
// Implements Burn's Dataset trait so the DataLoader can call
// .get(index) and .len() on it.
//
// Serde derives make the entire dataset round-trippable for
// the on-disk cache (Layer 6).
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use std::path::Path;

use anyhow::Result;
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::{aligner, parser};
use crate::domain::example::{CorefExample, CorpusMaxima};
use crate::domain::traits::SubwordTokenizer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorefDataset {
    examples: Vec<CorefExample>,
    lengths: Vec<usize>,
    maxima: CorpusMaxima,
    num_filtered: usize,
}

impl CorefDataset {
    /// Build the dataset from a corpus file: parse the JSON
    /// lines, then tokenize, remap and length-filter every
    /// document. `max_seq_length <= 0` disables filtering.
    pub fn from_file(
        path: impl AsRef<Path>,
        tokenizer: &dyn SubwordTokenizer,
        max_seq_length: i64,
    ) -> Result<Self> {
        let (documents, maxima) = parser::parse_jsonlines(path)?;
        let aligned = aligner::align_documents(&documents, tokenizer, max_seq_length)?;

        tracing::info!(
            "Finished preprocessing coref dataset: {} examples extracted, {} filtered",
            aligned.examples.len(),
            aligned.num_filtered
        );

        Ok(Self {
            examples: aligned.examples,
            lengths: aligned.lengths,
            maxima,
            num_filtered: aligned.num_filtered,
        })
    }

    /// Corpus-global padding targets — reused for every batch
    /// for the lifetime of the dataset
    pub fn maxima(&self) -> CorpusMaxima {
        self.maxima
    }

    /// Subtoken length of each example, positionally aligned
    /// with the example collection
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// How many documents the length filter dropped
    pub fn num_filtered(&self) -> usize {
        self.num_filtered
    }

    pub fn example_count(&self) -> usize {
        self.examples.len()
    }
}

impl Dataset<CorefExample> for CorefDataset {
    fn get(&self, index: usize) -> Option<CorefExample> {
        self.examples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.examples.len()
    }
}
