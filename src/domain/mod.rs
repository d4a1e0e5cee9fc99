// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits defining the core concepts of
// the coreference data pipeline.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - NO tokenizer-library code
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no tokenizer files, no backend needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The raw JSON-lines document record as it appears on disk
pub mod record;

// Parsed and tokenized example types plus corpus-wide maxima
pub mod example;

// Core abstractions (traits) that the infra layer implements
pub mod traits;
