// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the preprocessing pipeline for one corpus split:
//
//   Step 1: Load the subword tokenizer    (Layer 6 - infra)
//   Step 2: Check the split's cache file  (Layer 6 - infra)
//   Step 3: On miss, parse + align        (Layer 4 - data)
//   Step 4: Persist the dataset           (Layer 6 - infra)
//
// Each split (train / predict) has its own corpus file and its
// own cache file; which pair is used is the only difference
// between the two.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::dataset::CorefDataset;
use crate::infra::{cache::DatasetCache, hf_tokenizer::HfSubwordTokenizer};

/// Which corpus split to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Predict,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Predict => "predict",
        }
    }
}

// ─── Preprocessing Configuration ─────────────────────────────────────────────
// Everything the pipeline needs to know about one corpus.
// Serialisable so a run's configuration can be recorded
// alongside its cache files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub train_file: String,
    pub train_file_cache: String,
    pub predict_file: String,
    pub predict_file_cache: String,
    pub tokenizer_path: String,
    /// Documents with more subtokens than this are dropped;
    /// zero or negative disables the filter
    pub max_seq_length: i64,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            train_file: "data/train.jsonlines".to_string(),
            train_file_cache: "data/cache/train.json".to_string(),
            predict_file: "data/dev.jsonlines".to_string(),
            predict_file_cache: "data/cache/dev.json".to_string(),
            tokenizer_path: "tokenizer.json".to_string(),
            max_seq_length: 4096,
        }
    }
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Produce the preprocessed dataset for one split, from the
    /// cache when possible.
    pub fn execute(&self, split: Split) -> Result<CorefDataset> {
        let cfg = &self.config;
        let (corpus_file, cache_file) = self.split_paths(split);

        // ── Step 1: Load the tokenizer ───────────────────────────────────────
        // The same tokenizer file must be used for every split,
        // otherwise the cached subtoken ids are meaningless
        let tokenizer = HfSubwordTokenizer::from_file(&cfg.tokenizer_path)?;

        // ── Steps 2-4: Cache hit, or build and persist ───────────────────────
        let cache = DatasetCache::new(cache_file);
        let dataset = cache.load_or_build(|| {
            tracing::info!("Building '{}' split from '{}'", split.as_str(), corpus_file);
            CorefDataset::from_file(corpus_file, &tokenizer, cfg.max_seq_length)
        })?;

        let maxima = dataset.maxima();
        tracing::info!(
            "Split '{}': {} examples ({} filtered), maxima: mentions={}, cluster_size={}, clusters={}",
            split.as_str(),
            dataset.example_count(),
            dataset.num_filtered(),
            maxima.max_mention_num,
            maxima.max_cluster_size,
            maxima.max_num_clusters,
        );

        Ok(dataset)
    }

    /// The (corpus file, cache file) pair for a split
    fn split_paths(&self, split: Split) -> (&str, &str) {
        match split {
            Split::Train => (&self.config.train_file, &self.config.train_file_cache),
            Split::Predict => (&self.config.predict_file, &self.config.predict_file_cache),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paths_select_the_right_pair() {
        let use_case = PrepareUseCase::new(PrepareConfig::default());

        let (file, cache) = use_case.split_paths(Split::Train);
        assert_eq!(file, "data/train.jsonlines");
        assert_eq!(cache, "data/cache/train.json");

        let (file, cache) = use_case.split_paths(Split::Predict);
        assert_eq!(file, "data/dev.jsonlines");
        assert_eq!(cache, "data/cache/dev.json");
    }

    #[test]
    fn test_default_config_filters_by_length() {
        assert!(PrepareConfig::default().max_seq_length > 0);
    }
}
