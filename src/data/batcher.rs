// ============================================================
// Layer 4 — Coreference Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<CorefExample>
// into GPU-ready tensors.
//
// Three independent variable dimensions have to be normalized:
//   sequence length  → fixed-length encode at batch max + 2
//                      (the start/end special tokens)
//   cluster count    → outside-padding with empty clusters
//   cluster size     → inside-padding with null-span mentions
//
// Cluster padding runs outside-then-inside so the freshly
// appended empty clusters get inside-padded too; every document
// in every batch then yields the identical
// (max_num_clusters, max_cluster_size, 2) shape.
//
// The cluster dimensions are CORPUS-GLOBAL maxima, never
// batch-local — two batches from the same dataset always stack
// to the same trailing shape. A document that exceeds either
// maximum means the maxima were computed against a different
// corpus than the one being padded; that is corpus corruption
// and fails a hard assertion rather than silently truncating.
//
// Tensors are built by flattening into one long Vec and
// reshaping, so the output shapes are exactly (N, L), (N, L)
// and (N, max_num_clusters, max_cluster_size, 2).
//
// Reference: Burn Book §4 (Batcher)

use std::sync::Arc;

use anyhow::Result;
use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::domain::example::{CorefExample, CorpusMaxima, TokenSpan, NULL_SPAN_ID};
use crate::domain::traits::SubwordTokenizer;

// ─── CorefBatch ───────────────────────────────────────────────────────────────
/// A batch of coreference examples ready for the model forward
/// pass. All tensors have batch_size as their first dimension.
#[derive(Debug, Clone)]
pub struct CorefBatch<B: Backend> {
    /// Token id sequences — shape: [batch_size, seq_len]
    pub input_ids: Tensor<B, 2, Int>,

    /// Attention masks — shape: [batch_size, seq_len]
    /// 1 = real token, 0 = padding
    pub attention_mask: Tensor<B, 2, Int>,

    /// Cluster spans — shape:
    /// [batch_size, max_num_clusters, max_cluster_size, 2]
    /// with NULL_SPAN_ID in every padded slot
    pub clusters: Tensor<B, 4, Int>,
}

// ─── CorefBatcher ─────────────────────────────────────────────────────────────
/// Holds the target device, the corpus-global padding maxima
/// and the encode capability.
#[derive(Clone)]
pub struct CorefBatcher<B: Backend> {
    device: B::Device,
    maxima: CorpusMaxima,
    tokenizer: Arc<dyn SubwordTokenizer + Send + Sync>,
}

impl<B: Backend> CorefBatcher<B> {
    pub fn new(
        device: B::Device,
        maxima: CorpusMaxima,
        tokenizer: Arc<dyn SubwordTokenizer + Send + Sync>,
    ) -> Self {
        Self {
            device,
            maxima,
            tokenizer,
        }
    }

    /// Pad and stack a batch. `max_word_tokens` is the target
    /// subtoken length for the batch (without special tokens);
    /// the encoded sequence length is max_word_tokens + 2.
    pub fn pad_batch(
        &self,
        examples: &[CorefExample],
        max_word_tokens: usize,
    ) -> Result<CorefBatch<B>> {
        let batch_size = examples.len();
        let max_length = max_word_tokens + 2; // <s> and </s>
        let num_clusters = self.maxima.max_num_clusters.max(0) as usize;
        let cluster_size = self.maxima.max_cluster_size.max(0) as usize;

        let mut ids_flat: Vec<i32> = Vec::with_capacity(batch_size * max_length);
        let mut mask_flat: Vec<i32> = Vec::with_capacity(batch_size * max_length);
        let mut cluster_flat: Vec<i32> = Vec::with_capacity(batch_size * num_clusters * cluster_size * 2);

        for example in examples {
            // Fixed-length, truncation-free encoding via the
            // external capability
            let (ids, mask) = self.tokenizer.encode(&example.token_ids, max_length)?;
            ids_flat.extend(ids.iter().map(|&x| x as i32));
            mask_flat.extend(mask.iter().map(|&x| x as i32));

            for cluster in self.pad_clusters(&example.doc_key, &example.clusters) {
                for (first, last) in cluster {
                    cluster_flat.push(first as i32);
                    cluster_flat.push(last as i32);
                }
            }
        }

        let input_ids = Tensor::<B, 1, Int>::from_ints(ids_flat.as_slice(), &self.device)
            .reshape([batch_size, max_length]);

        let attention_mask = Tensor::<B, 1, Int>::from_ints(mask_flat.as_slice(), &self.device)
            .reshape([batch_size, max_length]);

        let clusters = Tensor::<B, 1, Int>::from_ints(cluster_flat.as_slice(), &self.device)
            .reshape([batch_size, num_clusters, cluster_size, 2]);

        Ok(CorefBatch {
            input_ids,
            attention_mask,
            clusters,
        })
    }

    /// Two-phase cluster padding against the corpus maxima.
    fn pad_clusters(&self, doc_key: &str, clusters: &[Vec<TokenSpan>]) -> Vec<Vec<(i64, i64)>> {
        let num_clusters = self.maxima.max_num_clusters.max(0) as usize;
        let cluster_size = self.maxima.max_cluster_size.max(0) as usize;

        assert!(
            clusters.len() <= num_clusters,
            "document '{}' has {} clusters but the corpus maxima allow {} — \
             maxima were computed against a different corpus",
            doc_key,
            clusters.len(),
            num_clusters
        );

        let mut padded: Vec<Vec<(i64, i64)>> = clusters
            .iter()
            .map(|cluster| {
                assert!(
                    cluster.len() <= cluster_size,
                    "document '{}' has a cluster of {} mentions but the corpus \
                     maxima allow {} — maxima were computed against a different corpus",
                    doc_key,
                    cluster.len(),
                    cluster_size
                );
                cluster
                    .iter()
                    .map(|&(first, last)| (first as i64, last as i64))
                    .collect()
            })
            .collect();

        // Outside-padding: empty clusters up to the global count
        padded.resize(num_clusters, Vec::new());

        // Inside-padding: null-span mentions up to the global
        // size — this also fills the empties appended above
        for cluster in &mut padded {
            cluster.resize(cluster_size, (NULL_SPAN_ID, NULL_SPAN_ID));
        }

        padded
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// The DataLoader calls .batch(items) with each mini-batch. The
// batch-local target length is the longest example in the batch;
// the cluster dimensions stay corpus-global regardless.
impl<B: Backend> Batcher<CorefExample, CorefBatch<B>> for CorefBatcher<B> {
    fn batch(&self, items: Vec<CorefExample>) -> CorefBatch<B> {
        let max_word_tokens = items.iter().map(|e| e.token_ids.len()).max().unwrap_or(0);
        self.pad_batch(&items, max_word_tokens)
            .expect("batch padding failed")
    }
}
