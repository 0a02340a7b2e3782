// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two I/O-bound stages of the pipeline sit behind traits so
// the application layer can run against fakes in tests:
//
//   DatasetSource → CsvLoader    (URL or local CSV)
//   DatasetSink   → CsvPersister (<base>/raw/{train,test}.csv)
//
// Splitting and preprocessing are pure functions over owned data
// and need no trait.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use std::path::{Path, PathBuf};

use crate::domain::error::IngestError;
use crate::domain::table::{LabeledTable, Table};

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Anything that can produce a raw table from a location identifier.
pub trait DatasetSource {
    /// Load the resource at `location` (a URL or a filesystem path).
    fn load_data(&self, location: &str) -> Result<Table, IngestError>;
}

// ─── DatasetSink ──────────────────────────────────────────────────────────────
/// Anything that can persist a train/test split under a base directory.
pub trait DatasetSink {
    /// Persist both partitions and return the directory they were written to.
    fn save(
        &self,
        train:     &LabeledTable,
        test:      &LabeledTable,
        base_path: &Path,
    ) -> Result<PathBuf, IngestError>;
}
