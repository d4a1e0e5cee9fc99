// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any business
// layer:
//
//   hf_tokenizer.rs — the concrete SubwordTokenizer capability.
//                     Wraps a HuggingFace tokenizer.json loaded
//                     through the `tokenizers` crate and
//                     resolves the start/end/pad special ids.
//
//   cache.rs        — dataset persistence. The preprocessed
//                     dataset is expensive to build (full corpus
//                     tokenization), so it is serialized once
//                     and reloaded on subsequent runs.
//
// Why is this a separate layer?
//   The data layer programs against the SubwordTokenizer trait
//   and plain structs; everything that touches the tokenizer
//   library or the filesystem representation lives here, so it
//   can be swapped without touching the pipeline.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// HuggingFace-backed subword tokenizer capability
pub mod hf_tokenizer;

/// Existence-checked on-disk dataset cache
pub mod cache;
