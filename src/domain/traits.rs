// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The subword tokenizer is an external collaborator: the data
// pipeline only needs two capabilities from it, so that is all
// the trait exposes. The aligner and batcher program against
// this trait and never see the tokenizer library.
//
// Implementations:
//   - HfSubwordTokenizer (infra) → wraps a HuggingFace
//     tokenizer.json via the `tokenizers` crate
//   - MockTokenizer (tests)      → deterministic word → id map
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

/// The tokenizer capability consumed by the pipeline.
pub trait SubwordTokenizer {
    /// Subtoken ids for a single word, with NO special tokens.
    /// A word may expand to zero, one, or many subtokens.
    fn tokenize(&self, word: &str) -> Result<Vec<u32>>;

    /// Fixed-length encoding of an already-tokenized document:
    /// prepends the start token, appends the end token, then
    /// pads to exactly `max_length`. Returns (ids, attention
    /// mask) where the mask is 1 for real positions and 0 for
    /// padding. Never truncates — `max_length` must already
    /// leave room for the two special tokens.
    fn encode(&self, token_ids: &[u32], max_length: usize) -> Result<(Vec<u32>, Vec<u32>)>;
}
