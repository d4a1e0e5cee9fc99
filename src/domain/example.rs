// ============================================================
// Layer 3 — Example Domain Types
// ============================================================
// The two intermediate shapes a document passes through on its
// way from the corpus file to a tensor batch:
//
//   ParsedDocument — sentences flattened into one word sequence,
//                    mentions re-expressed as flat word-index
//                    pairs (start, end_exclusive). Sentence
//                    boundaries are gone for good at this point.
//
//   CorefExample   — words tokenized into subword ids, mentions
//                    remapped to INCLUSIVE subtoken spans that
//                    already account for the start token the
//                    encoder will prepend (+1 offset).
//
// CorpusMaxima carries the three corpus-wide padding targets.
// They are computed once per corpus load and reused for every
// batch — padding dimensions are global, never batch-local.
//
// Reference: Kirstain et al. (2021) Coreference Resolution
//            without Span Representations

use serde::{Deserialize, Serialize};

/// Sentinel written into every padded cluster slot.
/// Negative, so it can never collide with a real subtoken index.
pub const NULL_SPAN_ID: i64 = -1;

/// A mention as a flat word-index pair (start, end_exclusive).
pub type WordSpan = (usize, usize);

/// A mention as an inclusive subtoken-index pair (first, last),
/// both already offset by +1 for the prepended start token.
pub type TokenSpan = (usize, usize);

/// A document after sentence flattening, before tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub doc_key: String,
    /// All words in document order (sentences concatenated)
    pub words: Vec<String>,
    /// Clusters of word-index mention spans
    pub clusters: Vec<Vec<WordSpan>>,
}

impl ParsedDocument {
    pub fn mention_count(&self) -> usize {
        self.clusters.iter().map(|c| c.len()).sum()
    }
}

/// A fully tokenized and span-remapped training example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorefExample {
    pub doc_key: String,

    /// Maps each subtoken position to the word it came from.
    /// Position 0 is a seeded placeholder for the start token
    /// the encoder prepends, so this is always one longer than
    /// `token_ids`.
    pub end_token_to_word: Vec<usize>,

    /// Subword token ids, NO special tokens included
    pub token_ids: Vec<u32>,

    /// Clusters of inclusive subtoken spans (+1 start offset)
    pub clusters: Vec<Vec<TokenSpan>>,
}

/// Corpus-wide maxima used as global padding targets.
///
/// Each field is a running max seeded with -1, so a corpus with
/// zero documents is detectable (all three stay -1). A document
/// with no clusters contributes 0 (not nothing) to
/// `max_cluster_size` and `max_num_clusters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusMaxima {
    /// Max over documents of total mention count
    pub max_mention_num: i64,
    /// Max over all clusters of mentions per cluster
    pub max_cluster_size: i64,
    /// Max over documents of cluster count
    pub max_num_clusters: i64,
}

impl CorpusMaxima {
    /// Maxima of an empty corpus — all three sentinels at -1
    pub fn empty() -> Self {
        Self {
            max_mention_num: -1,
            max_cluster_size: -1,
            max_num_clusters: -1,
        }
    }

    /// Fold one document into the running maxima.
    pub fn observe(&mut self, doc: &ParsedDocument) {
        self.max_mention_num = self.max_mention_num.max(doc.mention_count() as i64);
        // Guard against reducing over an empty set: a document
        // with no clusters contributes 0, not nothing.
        let largest_cluster = doc
            .clusters
            .iter()
            .map(|c| c.len())
            .max()
            .unwrap_or(0);
        self.max_cluster_size = self.max_cluster_size.max(largest_cluster as i64);
        self.max_num_clusters = self.max_num_clusters.max(doc.clusters.len() as i64);
    }

    /// True when no document has ever been observed
    pub fn is_empty_corpus(&self) -> bool {
        self.max_mention_num < 0
    }
}

impl Default for CorpusMaxima {
    fn default() -> Self {
        Self::empty()
    }
}
