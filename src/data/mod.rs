// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw JSON-lines corpus
// file all the way to GPU-ready tensor batches.
//
// The pipeline flows in this order:
//
//   corpus.jsonlines
//       │
//       ▼
//   parser            → one ParsedDocument per line, sentences
//       │               flattened, plus corpus-wide maxima
//       ▼
//   aligner           → tokenizes word by word, remaps clusters
//       │               into subtoken spans, drops overlong docs
//       ▼
//   CorefDataset      → implements Burn's Dataset trait
//       │
//       ▼
//   CorefBatcher      → pads clusters and sequences, stacks
//       │               samples into tensor batches
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// Each module is responsible for exactly one step.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Parses the JSON-lines corpus and computes padding maxima
pub mod parser;

/// Aligns word indices to subtoken indices and remaps clusters
pub mod aligner;

/// Implements Burn's Dataset trait for coreference examples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Deterministic tokenizer double shared by the data-layer tests
#[cfg(test)]
pub(crate) mod mock;
