// ============================================================
// Layer 4 — Mock Tokenizer (tests only)
// ============================================================
// A deterministic stand-in for the real subword tokenizer so
// the alignment and padding logic can be tested without any
// tokenizer file or vocabulary on disk.
//
// Behaviour:
//   - By default every word expands to exactly one subtoken
//     whose id is derived from the word's byte length.
//   - Individual words can be overridden to expand to any
//     piece sequence — including zero pieces, to exercise the
//     degenerate empty-expansion path.
//   - encode() mirrors the RoBERTa convention the pipeline
//     assumes: <s> = 0, <pad> = 1, </s> = 2.

use std::collections::HashMap;

use anyhow::{ensure, Result};

use crate::domain::traits::SubwordTokenizer;

pub const MOCK_START_ID: u32 = 0;
pub const MOCK_PAD_ID: u32 = 1;
pub const MOCK_END_ID: u32 = 2;

pub struct MockTokenizer {
    pieces: HashMap<String, Vec<u32>>,
}

impl MockTokenizer {
    /// Every word becomes exactly one subtoken
    pub fn one_piece_per_word() -> Self {
        Self {
            pieces: HashMap::new(),
        }
    }

    /// Override the piece sequence for one word
    pub fn with_pieces(mut self, word: &str, ids: Vec<u32>) -> Self {
        self.pieces.insert(word.to_string(), ids);
        self
    }
}

impl SubwordTokenizer for MockTokenizer {
    fn tokenize(&self, word: &str) -> Result<Vec<u32>> {
        Ok(self
            .pieces
            .get(word)
            .cloned()
            .unwrap_or_else(|| vec![1000 + word.len() as u32]))
    }

    fn encode(&self, token_ids: &[u32], max_length: usize) -> Result<(Vec<u32>, Vec<u32>)> {
        ensure!(
            token_ids.len() + 2 <= max_length,
            "encode would truncate: {} tokens + 2 specials > max_length {}",
            token_ids.len(),
            max_length
        );

        let real_len = token_ids.len() + 2;
        let mut ids = Vec::with_capacity(max_length);
        ids.push(MOCK_START_ID);
        ids.extend_from_slice(token_ids);
        ids.push(MOCK_END_ID);
        ids.resize(max_length, MOCK_PAD_ID);

        let mut mask = vec![1u32; real_len];
        mask.resize(max_length, 0);

        Ok((ids, mask))
    }
}
