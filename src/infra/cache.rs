// ============================================================
// Layer 6 — Dataset Cache
// ============================================================
// Preprocessing a corpus means tokenizing every word of every
// document — minutes of work on a large split. The cache
// persists the finished CorefDataset so later runs skip
// straight to training.
//
// Validity is EXISTENCE-ONLY: if the cache file is present it
// is loaded, full stop. No content hashing, no staleness
// detection — a cache built from an older corpus or a different
// tokenizer is never invalidated automatically. Delete the
// cache file after changing either. A corrupt cache file fails
// deserialization and aborts; there is no rebuild fallback.
//
// Reference: Rust Book §9 (Error Handling)

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::data::dataset::CorefDataset;

pub struct DatasetCache {
    path: PathBuf,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the cached dataset if the cache file exists,
    /// otherwise build it with `build` and persist the result.
    pub fn load_or_build(
        &self,
        build: impl FnOnce() -> Result<CorefDataset>,
    ) -> Result<CorefDataset> {
        if self.path.exists() {
            tracing::info!("Reading dataset from cache '{}'", self.path.display());
            return self.load();
        }

        let dataset = build()?;
        self.store(&dataset)?;
        Ok(dataset)
    }

    fn load(&self) -> Result<CorefDataset> {
        let blob = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read cache file '{}'", self.path.display()))?;
        serde_json::from_str(&blob)
            .with_context(|| format!("Cannot deserialize cache file '{}'", self.path.display()))
    }

    fn store(&self, dataset: &CorefDataset) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).ok();
        }
        let blob = serde_json::to_string(dataset)?;
        fs::write(&self.path, blob)
            .with_context(|| format!("Cannot write cache file '{}'", self.path.display()))?;

        tracing::info!(
            "Cached {} preprocessed examples to '{}'",
            dataset.example_count(),
            self.path.display()
        );
        Ok(())
    }
}
