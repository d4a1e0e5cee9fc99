// ============================================================
// Layer 4 — Corpus Parser
// ============================================================
// Reads the JSON-lines corpus file and produces, per document:
//   - the flat word sequence (sentences concatenated in order)
//   - clusters re-expressed as flat word-index pairs
// plus three corpus-wide maxima used later as padding targets.
//
// Flattening is order-preserving and loses sentence boundaries
// permanently: every downstream span is word-index based only.
// A mention triple [sent_idx, start, end) becomes the flat pair
// (offset[sent_idx] + start, offset[sent_idx] + end).
//
// Error policy: a malformed line, an out-of-range sentence
// index, or a mention span outside its sentence is corpus
// corruption — fatal, no partial-corpus recovery.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use anyhow::{bail, Context, Result};
use std::{fs, path::Path};

use crate::domain::example::{CorpusMaxima, ParsedDocument, WordSpan};
use crate::domain::record::DocumentRecord;

/// Parse the whole corpus file into flattened documents plus
/// the running maxima over mentions, cluster sizes and cluster
/// counts.
pub fn parse_jsonlines(path: impl AsRef<Path>) -> Result<(Vec<ParsedDocument>, CorpusMaxima)> {
    let path = path.as_ref();
    tracing::info!("Reading dataset from '{}'", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read corpus file '{}'", path.display()))?;

    let mut documents = Vec::new();
    let mut maxima = CorpusMaxima::empty();

    for (line_no, line) in content.lines().enumerate() {
        let record: DocumentRecord = serde_json::from_str(line).with_context(|| {
            format!(
                "Malformed record at line {} of '{}'",
                line_no + 1,
                path.display()
            )
        })?;

        let doc = flatten_record(record)
            .with_context(|| format!("Invalid annotation at line {}", line_no + 1))?;

        maxima.observe(&doc);
        documents.push(doc);
    }

    tracing::debug!(
        "Parsed {} documents (max_mention_num={}, max_cluster_size={}, max_num_clusters={})",
        documents.len(),
        maxima.max_mention_num,
        maxima.max_cluster_size,
        maxima.max_num_clusters,
    );

    Ok((documents, maxima))
}

/// Flatten one record's sentences into a single word sequence
/// and remap each mention triple onto flat word indices.
fn flatten_record(record: DocumentRecord) -> Result<ParsedDocument> {
    // Word offset of each sentence within the flat sequence.
    // Sentence s starts at the total word count of sentences
    // before it — word indices are dense from zero, so a plain
    // running sum is the whole lookup table.
    let mut offsets = Vec::with_capacity(record.sentences.len());
    let mut total = 0usize;
    for sentence in &record.sentences {
        offsets.push(total);
        total += sentence.len();
    }

    let mut clusters: Vec<Vec<WordSpan>> = Vec::with_capacity(record.clusters.len());
    for cluster in &record.clusters {
        let mut spans = Vec::with_capacity(cluster.len());
        for &[sent_idx, start, end] in cluster {
            let sentence_len = match record.sentences.get(sent_idx) {
                Some(s) => s.len(),
                None => bail!(
                    "mention references sentence {} but '{}' has only {} sentences",
                    sent_idx,
                    record.doc_key,
                    record.sentences.len()
                ),
            };
            // end is exclusive; an empty span would leave the
            // aligner with no last word to look up
            if start >= end || end > sentence_len {
                bail!(
                    "mention span ({}, {}) out of range for sentence {} ({} words) in '{}'",
                    start,
                    end,
                    sent_idx,
                    sentence_len,
                    record.doc_key
                );
            }
            spans.push((offsets[sent_idx] + start, offsets[sent_idx] + end));
        }
        clusters.push(spans);
    }

    let words: Vec<String> = record.sentences.into_iter().flatten().collect();

    Ok(ParsedDocument {
        doc_key: record.doc_key,
        words,
        clusters,
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    /// Write test corpus content to a unique temp file
    fn write_corpus(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word-coref-parser-{}-{}.jsonlines",
            std::process::id(),
            name
        ));
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    const TWO_SENTENCE_DOC: &str = r#"{"doc_key": "d0", "sentences": [["John", "Smith", "is", "here", "."], ["He", "left", "."]], "clusters": [[[0, 0, 2], [1, 0, 1]]]}"#;

    #[test]
    fn test_flattens_sentences_in_order() {
        let path = write_corpus("flatten", TWO_SENTENCE_DOC);
        let (docs, _) = parse_jsonlines(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].words.len(), 8);
        assert_eq!(docs[0].words[0], "John");
        assert_eq!(docs[0].words[5], "He");
    }

    #[test]
    fn test_mentions_get_flat_word_indices() {
        let path = write_corpus("remap", TWO_SENTENCE_DOC);
        let (docs, _) = parse_jsonlines(&path).unwrap();
        fs::remove_file(&path).ok();

        // "He" is word 0 of sentence 1, which starts at flat
        // offset 5 → mention (5, 6)
        assert_eq!(docs[0].clusters, vec![vec![(0, 2), (5, 6)]]);
    }

    #[test]
    fn test_maxima_across_documents() {
        let corpus = format!(
            "{}\n{}",
            TWO_SENTENCE_DOC,
            r#"{"doc_key": "d1", "sentences": [["a", "b", "c"]], "clusters": [[[0, 0, 1], [0, 1, 2], [0, 2, 3]], [[0, 0, 3]]]}"#
        );
        let path = write_corpus("maxima", &corpus);
        let (_, maxima) = parse_jsonlines(&path).unwrap();
        fs::remove_file(&path).ok();

        // d1 has 4 mentions total, a cluster of 3, 2 clusters
        assert_eq!(maxima.max_mention_num, 4);
        assert_eq!(maxima.max_cluster_size, 3);
        assert_eq!(maxima.max_num_clusters, 2);
    }

    #[test]
    fn test_empty_corpus_keeps_sentinel_maxima() {
        let path = write_corpus("empty", "");
        let (docs, maxima) = parse_jsonlines(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(docs.is_empty());
        assert!(maxima.is_empty_corpus());
    }

    #[test]
    fn test_clusterless_document_counts_as_zero() {
        let corpus = r#"{"doc_key": "d0", "sentences": [["hello"]], "clusters": []}"#;
        let path = write_corpus("clusterless", corpus);
        let (_, maxima) = parse_jsonlines(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(maxima.max_cluster_size, 0);
        assert_eq!(maxima.max_num_clusters, 0);
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let corpus = format!("{}\nnot json at all", TWO_SENTENCE_DOC);
        let path = write_corpus("malformed", &corpus);
        let result = parse_jsonlines(&path);
        fs::remove_file(&path).ok();

        // No skip-and-continue: the whole load aborts
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_sentence_index_is_fatal() {
        let corpus = r#"{"doc_key": "d0", "sentences": [["hi"]], "clusters": [[[3, 0, 1]]]}"#;
        let path = write_corpus("bad-sentence", corpus);
        let result = parse_jsonlines(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_span_past_sentence_end_is_fatal() {
        let corpus = r#"{"doc_key": "d0", "sentences": [["hi", "there"]], "clusters": [[[0, 1, 5]]]}"#;
        let path = write_corpus("bad-span", corpus);
        let result = parse_jsonlines(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
