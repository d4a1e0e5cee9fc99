// ============================================================
// Layer 3 — Document Record Domain Type
// ============================================================
// Represents one line of the annotated corpus file exactly as
// it appears on disk. This is a plain data struct — the serde
// derives map it straight onto the JSON-lines schema:
//
//   {
//     "doc_key":   "bn/voa/02/voa_0220_0",
//     "sentences": [["John", "Smith", ...], ["He", ...]],
//     "clusters":  [[[0, 0, 2], [1, 0, 1]], ...]
//   }
//
// A mention is a triple [sentence_idx, start_word, end_word]
// where end_word is EXCLUSIVE and both word indices count from
// the start of their own sentence, not the document.
//
// Reference: Rust Book §5 (Structs)
//            serde_json crate documentation

use serde::{Deserialize, Serialize};

/// One raw mention annotation: (sentence index, start word index,
/// end word index exclusive), all relative to the sentence.
pub type MentionTriple = [usize; 3];

/// A single document record from the corpus file.
/// No flattening or index remapping has happened yet —
/// this is the on-disk shape, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Opaque document identifier — kept for traceability
    pub doc_key: String,

    /// Sentences in document order, each a list of surface words
    pub sentences: Vec<Vec<String>>,

    /// Coreference clusters; each cluster is a set of mentions
    pub clusters: Vec<Vec<MentionTriple>>,
}

impl DocumentRecord {
    /// Total number of words across all sentences
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(|s| s.len()).sum()
    }

    /// Total number of mentions across all clusters
    pub fn mention_count(&self) -> usize {
        self.clusters.iter().map(|c| c.len()).sum()
    }
}
