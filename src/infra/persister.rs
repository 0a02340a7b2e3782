// ============================================================
// Layer 6 — Split Persister
// ============================================================
// Writes the train/test partitions to a fixed layout:
//
//   <base_path>/
//     raw/
//       train.csv   ← header row + train rows, no index column
//       test.csv    ← header row + test rows, no index column
//
// Each file is first written to a temporary file inside raw/ and
// then renamed over the target, so train.csv and test.csv are
// always either the previous version or the complete new one.
// Existing files are overwritten on every run.
//
// Files already written stay on disk if a later write fails.
//
// Reference: csv crate documentation
//            tempfile crate documentation
//            Rust Book §12 (I/O and File Handling)

use std::{
    io,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::domain::error::IngestError;
use crate::domain::table::LabeledTable;
use crate::domain::traits::DatasetSink;

pub const RAW_DIR: &str = "raw";
pub const TRAIN_FILE: &str = "train.csv";
pub const TEST_FILE: &str = "test.csv";

/// Persists splits as CSV files under `<base>/raw`.
/// Implements the DatasetSink trait from Layer 3.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvPersister;

impl CsvPersister {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetSink for CsvPersister {
    fn save(
        &self,
        train:     &LabeledTable,
        test:      &LabeledTable,
        base_path: &Path,
    ) -> Result<PathBuf, IngestError> {
        let raw_dir = base_path.join(RAW_DIR);
        if train.is_empty() || test.is_empty() {
            tracing::warn!(
                "Writing an empty partition ({} train / {} test rows)",
                train.len(),
                test.len()
            );
        }
        match write_split(train, test, &raw_dir) {
            Ok(()) => {
                tracing::debug!(
                    "Train and test data saved to {} ({} / {} rows)",
                    raw_dir.display(),
                    train.len(),
                    test.len(),
                );
                Ok(raw_dir)
            }
            Err(e) => {
                tracing::error!(
                    kind = %e.kind(),
                    "Unexpected error occurred while saving the data: {}",
                    e
                );
                Err(e)
            }
        }
    }
}

fn write_split(train: &LabeledTable, test: &LabeledTable, raw_dir: &Path) -> Result<(), IngestError> {
    // Like `mkdir -p`: creates missing ancestors, fine if it already exists
    std::fs::create_dir_all(raw_dir).map_err(|source| IngestError::Persist {
        path: raw_dir.to_path_buf(),
        source,
    })?;

    for (table, name) in [(train, TRAIN_FILE), (test, TEST_FILE)] {
        let path = raw_dir.join(name);
        write_csv_atomic(table, &path).map_err(|source| IngestError::Persist { path, source })?;
    }
    Ok(())
}

/// Serialise `table` to a temp file next to `path`, then rename it into place.
fn write_csv_atomic(table: &LabeledTable, path: &Path) -> io::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "output path has no parent"))?;

    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::Writer::from_writer(tmp.as_file());
        writer.write_record(table.headers())?;
        for row in table.rows() {
            writer.write_record(table.record(row))?;
        }
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
