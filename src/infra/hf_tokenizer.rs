// ============================================================
// Layer 6 — HuggingFace Tokenizer Adapter
// ============================================================
// The concrete SubwordTokenizer capability, backed by a
// tokenizer.json file loaded through the `tokenizers` crate.
//
// Two jobs:
//   tokenize(word) — subtoken ids for ONE word, no special
//                    tokens. The pipeline calls this word by
//                    word so it can track piece offsets itself.
//   encode(ids, L) — fixed-length encoding of a finished
//                    document: <s> + ids + </s> + padding to
//                    exactly L, plus the 0/1 attention mask.
//                    Padding is truncation-free: the caller
//                    already sized L to fit.
//
// Special ids are resolved once at load time. RoBERTa-style
// names (<s>, </s>, <pad>) are tried first, BERT-style names
// ([CLS], [SEP], [PAD]) as a fallback.
//
// Reference: tokenizers crate documentation

use std::path::Path;

use anyhow::{ensure, Context, Result};
use tokenizers::Tokenizer;

use crate::domain::traits::SubwordTokenizer;

pub struct HfSubwordTokenizer {
    inner: Tokenizer,
    start_id: u32,
    end_id: u32,
    pad_id: u32,
}

impl HfSubwordTokenizer {
    /// Load a tokenizer.json and resolve the special-token ids.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let inner = Tokenizer::from_file(path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })?;

        let start_id = resolve_id(&inner, &["<s>", "[CLS]"])
            .with_context(|| format!("No start token in '{}'", path.display()))?;
        let end_id = resolve_id(&inner, &["</s>", "[SEP]"])
            .with_context(|| format!("No end token in '{}'", path.display()))?;
        let pad_id = resolve_id(&inner, &["<pad>", "[PAD]"])
            .with_context(|| format!("No pad token in '{}'", path.display()))?;

        tracing::debug!(
            "Loaded tokenizer '{}' (start={}, end={}, pad={})",
            path.display(),
            start_id,
            end_id,
            pad_id
        );

        Ok(Self {
            inner,
            start_id,
            end_id,
            pad_id,
        })
    }
}

/// First vocabulary hit among the candidate special-token names
fn resolve_id(tokenizer: &Tokenizer, candidates: &[&str]) -> Option<u32> {
    candidates.iter().find_map(|t| tokenizer.token_to_id(t))
}

impl SubwordTokenizer for HfSubwordTokenizer {
    fn tokenize(&self, word: &str) -> Result<Vec<u32>> {
        let encoding = self
            .inner
            .encode(word, false)
            .map_err(|e| anyhow::anyhow!("Tokenisation error on {:?}: {}", word, e))?;
        Ok(encoding.get_ids().to_vec())
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
        ids.push(self.start_id);
        ids.extend_from_slice(token_ids);
        ids.push(self.end_id);
        ids.resize(max_length, self.pad_id);

        let mut mask = vec![1u32; real_len];
        mask.resize(max_length, 0);

        Ok((ids, mask))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Write a minimal valid WordLevel tokenizer.json so the
    /// adapter can be tested without any pretrained artifacts
    fn write_tokenizer_json(name: &str) -> PathBuf {
        let vocab = serde_json::json!({
            "[PAD]": 0,
            "[UNK]": 1,
            "[CLS]": 2,
            "[SEP]": 3,
            "john": 4,
            "smith": 5,
            "lives": 6,
        });

        let tokenizer_json = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [
                {"id": 0, "content": "[PAD]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 1, "content": "[UNK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 2, "content": "[CLS]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
                {"id": 3, "content": "[SEP]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
            ],
            "normalizer": {
                "type": "BertNormalizer",
                "clean_text": true,
                "handle_chinese_chars": true,
                "strip_accents": null,
                "lowercase": true
            },
            "pre_tokenizer": { "type": "Whitespace" },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": vocab,
                "unk_token": "[UNK]"
            }
        });

        let path = std::env::temp_dir().join(format!(
            "word-coref-tokenizer-{}-{}.json",
            std::process::id(),
            name
        ));
        fs::write(&path, serde_json::to_string_pretty(&tokenizer_json).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_resolves_bert_style_special_ids() {
        let path = write_tokenizer_json("specials");
        let tok = HfSubwordTokenizer::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(tok.start_id, 2); // [CLS]
        assert_eq!(tok.end_id, 3); // [SEP]
        assert_eq!(tok.pad_id, 0); // [PAD]
    }

    #[test]
    fn test_tokenize_single_word_has_no_special_tokens() {
        let path = write_tokenizer_json("tokenize");
        let tok = HfSubwordTokenizer::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(tok.tokenize("John").unwrap(), vec![4]);
        assert_eq!(tok.tokenize("lives").unwrap(), vec![6]);
    }

    #[test]
    fn test_encode_fixed_length_with_mask() {
        let path = write_tokenizer_json("encode");
        let tok = HfSubwordTokenizer::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        let (ids, mask) = tok.encode(&[4, 5], 6).unwrap();
        // [CLS] john smith [SEP] [PAD] [PAD]
        assert_eq!(ids, vec![2, 4, 5, 3, 0, 0]);
        assert_eq!(mask, vec![1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_encode_refuses_to_truncate() {
        let path = write_tokenizer_json("truncate");
        let tok = HfSubwordTokenizer::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(tok.encode(&[4, 5, 6], 4).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(HfSubwordTokenizer::from_file("/nonexistent/tokenizer.json").is_err());
    }
}
