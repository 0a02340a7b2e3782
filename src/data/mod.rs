// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from a CSV resource to the
// train/test partitions handed to the persister.
//
// The pipeline flows in this order:
//
//   CSV (URL or path)
//       │
//       ▼
//   CsvLoader         → fetches the bytes, parses a raw Table
//       │
//       ▼
//   Preprocessor      → drops tweet_id, keeps two labels, encodes 1/0
//       │
//       ▼
//   split_dataset     → seeded shuffle, cut into train/test
//
// Each module is responsible for exactly one step and can be
// tested on its own.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads CSV data from a URL or local file
pub mod loader;

/// Filters and encodes the sentiment label
pub mod preprocessor;

/// Shuffles and splits data into train/test sets
pub mod splitter;
