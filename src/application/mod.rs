// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (preparing a split or inspecting one).
//
// Rules for this layer:
//   - No parsing or alignment math here (that's Layer 4)
//   - No UI or printing here (that's Layer 1)
//   - No direct file-format knowledge (Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Preprocess a corpus split and cache the result
pub mod prepare_use_case;

// Load a split and summarize it for display
pub mod inspect_use_case;
