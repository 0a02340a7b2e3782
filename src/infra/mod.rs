// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles the concerns that touch the outside world but are not
// part of the data transformation itself:
//
//   params.rs     — YAML parameter file
//                   Reads params.yaml into an opaque mapping and
//                   resolves data_ingestion.test_size from it.
//
//   persister.rs  — Split output
//                   Writes <base>/raw/train.csv and test.csv,
//                   creating directories as needed and replacing
//                   each file atomically.
//
//   logging.rs    — Logging context for one run
//                   Console output for all levels plus an
//                   append-only error log for ERROR events.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// YAML parameter loading
pub mod params;

/// Train/test CSV persistence
pub mod persister;

/// Console + error-log tracing subscriber
pub mod logging;
