// ============================================================
// Layer 2 — Inspect Use Case
// ============================================================
// Read-only companion to PrepareUseCase: load (or build) one
// split and condense it into a summary the CLI can print.
// Useful for sanity-checking a corpus before a training run —
// the filtered count in particular tells you how much data a
// given max_seq_length throws away.

use anyhow::Result;

use crate::application::prepare_use_case::{PrepareConfig, PrepareUseCase, Split};
use crate::domain::example::CorpusMaxima;

/// What `inspect` reports about one split.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub split: &'static str,
    pub example_count: usize,
    pub num_filtered: usize,
    pub maxima: CorpusMaxima,
    /// (shortest, longest, mean) subtoken length over surviving
    /// examples; None for an empty split
    pub length_stats: Option<(usize, usize, f64)>,
}

pub struct InspectUseCase {
    prepare: PrepareUseCase,
}

impl InspectUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self {
            prepare: PrepareUseCase::new(config),
        }
    }

    pub fn execute(&self, split: Split) -> Result<DatasetSummary> {
        let dataset = self.prepare.execute(split)?;

        let lengths = dataset.lengths();
        let length_stats = if lengths.is_empty() {
            None
        } else {
            let shortest = *lengths.iter().min().unwrap_or(&0);
            let longest = *lengths.iter().max().unwrap_or(&0);
            let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
            Some((shortest, longest, mean))
        };

        Ok(DatasetSummary {
            split: split.as_str(),
            example_count: dataset.example_count(),
            num_filtered: dataset.num_filtered(),
            maxima: dataset.maxima(),
            length_stats,
        })
    }
}
