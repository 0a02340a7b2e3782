// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to run the ingestion
// job from parameter file to persisted split.
//
// Rules for this layer:
//   - No CSV parsing or label logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - No direct file or network access (Layers 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The data ingestion workflow
pub mod ingest_use_case;
