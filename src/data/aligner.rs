// ============================================================
// Layer 4 — Word→Subtoken Aligner
// ============================================================
// Tokenizes each document word by word while tracking, for every
// word, the subtoken index of its first and last piece. Those
// two lookup tables are all that is needed to remap word-level
// mention spans into subtoken space.
//
// Index bookkeeping (the part that must not drift):
//   - The encoder will later prepend a start token, so every
//     subtoken index carries a +1 offset from the start.
//   - first[w] = subtoken count BEFORE tokenizing w, plus 1
//   - last[w]  = subtoken count AFTER tokenizing w — no extra
//     +1, because the running count already lands one past the
//     word's final piece thanks to the earlier offset. Together
//     the two bounds cover the word's pieces inclusively.
//   - The reverse map (subtoken position → word index) is
//     pre-seeded with one entry standing in for the start token
//     at position 0.
//
// Word indices are dense integers from zero, so the lookup
// tables are plain Vecs sized to the word count rather than
// hash maps — the contiguous-range invariant is explicit.
//
// Documents whose total subtoken count exceeds max_seq_length
// are dropped whole (never truncated), counted, and logged.
// The filter runs strictly after the document is fully
// tokenized, never incrementally.
//
// Reference: Kirstain et al. (2021) Coreference Resolution
//            without Span Representations
//            Rust Book §8 (Vectors)

use anyhow::{Context, Result};

use crate::domain::example::{CorefExample, ParsedDocument, TokenSpan};
use crate::domain::traits::SubwordTokenizer;

/// Output of aligning a corpus: surviving examples in input
/// order, their subtoken lengths (positionally aligned), and
/// how many documents the length filter dropped.
pub struct Aligned {
    pub examples: Vec<CorefExample>,
    pub lengths: Vec<usize>,
    pub num_filtered: usize,
}

/// Tokenize and remap every document, applying the length
/// filter. `max_seq_length <= 0` disables filtering entirely.
pub fn align_documents(
    documents: &[ParsedDocument],
    tokenizer: &dyn SubwordTokenizer,
    max_seq_length: i64,
) -> Result<Aligned> {
    let mut examples = Vec::new();
    let mut lengths = Vec::new();
    let mut num_filtered = 0usize;

    for doc in documents {
        let example = align_document(doc, tokenizer)?;

        // Drop, don't truncate: a truncated document would have
        // mentions pointing past the end of its token sequence
        if max_seq_length > 0 && example.token_ids.len() > max_seq_length as usize {
            num_filtered += 1;
            continue;
        }

        lengths.push(example.token_ids.len());
        examples.push(example);
    }

    tracing::info!(
        "Aligned {} examples, {} filtered due to sequence length",
        examples.len(),
        num_filtered
    );

    Ok(Aligned {
        examples,
        lengths,
        num_filtered,
    })
}

/// Tokenize one document and remap its clusters into inclusive
/// subtoken spans.
fn align_document(doc: &ParsedDocument, tokenizer: &dyn SubwordTokenizer) -> Result<CorefExample> {
    let word_count = doc.words.len();

    // Dense lookup tables: word index → first/last subtoken index
    let mut first_subtoken = vec![0usize; word_count];
    let mut last_subtoken = vec![0usize; word_count];

    // Reverse map, seeded with a placeholder for the start token
    let mut end_token_to_word = vec![0usize];
    let mut token_ids: Vec<u32> = Vec::new();

    for (idx, word) in doc.words.iter().enumerate() {
        first_subtoken[idx] = token_ids.len() + 1; // +1 for the start token
        let pieces = tokenizer
            .tokenize(word)
            .with_context(|| format!("Cannot tokenize word {} of '{}'", idx, doc.doc_key))?;

        if pieces.is_empty() {
            // Degenerate case: the word contributes no subtokens.
            // Its span stays well-defined as the empty run
            // last == first - 1; the cursor does not advance.
            tracing::warn!(
                "Word {} ({:?}) of '{}' tokenized to zero subtokens",
                idx,
                word,
                doc.doc_key
            );
        }

        for _ in &pieces {
            end_token_to_word.push(idx);
        }
        token_ids.extend(pieces);
        last_subtoken[idx] = token_ids.len();
    }

    let clusters = remap_clusters(doc, &first_subtoken, &last_subtoken)?;

    Ok(CorefExample {
        doc_key: doc.doc_key.clone(),
        end_token_to_word,
        token_ids,
        clusters,
    })
}

/// Re-express every cluster in subtoken coordinates:
/// (start_word, end_word_exclusive) becomes
/// (first_subtoken[start_word], last_subtoken[end_word - 1]).
/// A mention naming a word outside the document is annotation
/// corruption — fatal.
fn remap_clusters(
    doc: &ParsedDocument,
    first_subtoken: &[usize],
    last_subtoken: &[usize],
) -> Result<Vec<Vec<TokenSpan>>> {
    doc.clusters
        .iter()
        .map(|cluster| {
            cluster
                .iter()
                .map(|&(start, end)| {
                    let first = *first_subtoken.get(start).with_context(|| {
                        format!(
                            "mention start {} out of range in '{}' ({} words)",
                            start,
                            doc.doc_key,
                            doc.words.len()
                        )
                    })?;
                    let last = *end
                        .checked_sub(1)
                        .and_then(|w| last_subtoken.get(w))
                        .with_context(|| {
                            format!(
                                "mention end {} out of range in '{}' ({} words)",
                                end,
                                doc.doc_key,
                                doc.words.len()
                            )
                        })?;
                    Ok((first, last))
                })
                .collect()
        })
        .collect()
}
