// ============================================================
// Layer 2 — IngestUseCase
// ============================================================
// Orchestrates the full ingestion pipeline in order:
//
//   Step 1: Load params.yaml, read test_size   (Layer 6 - infra)
//   Step 2: Load the CSV dataset               (Layer 4 - data)
//   Step 3: Drop id, filter + encode labels    (Layer 4 - data)
//   Step 4: Check there is enough to split     (Layer 4 - data)
//   Step 5: Seeded train/test split            (Layer 4 - data)
//   Step 6: Write raw/train.csv, raw/test.csv  (Layer 6 - infra)
//
// Each step returns as soon as it fails. Nothing is retried and
// files written before a failure are left in place.
//
// The loader and persister are trait objects so tests can swap
// in fakes; `IngestUseCase::new` wires the real ones.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Rust Book §17 (Trait Objects)

use std::path::PathBuf;

use crate::data::{
    loader::CsvLoader,
    preprocessor::Preprocessor,
    splitter::{split_dataset, split_sizes, SPLIT_SEED},
};
use crate::domain::{
    error::IngestError,
    label::LabelConfig,
    traits::{DatasetSink, DatasetSource},
};
use crate::infra::{params::load_params, persister::CsvPersister};

/// Public tweet emotion dataset used when no other location is given
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/campusx-official/jupyter-masterclass/main/tweet_emotions.csv";

// ─── Ingestion Configuration ─────────────────────────────────────────────────
// Where to read from and write to. The split fraction is not here:
// it always comes from the parameter file.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub params_path: PathBuf,
    pub data_url:    String,
    pub data_dir:    PathBuf,
    pub labels:      LabelConfig,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            params_path: PathBuf::from("params.yaml"),
            data_url:    DEFAULT_DATA_URL.to_string(),
            data_dir:    PathBuf::from("./data"),
            labels:      LabelConfig::default(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestSummary {
    pub test_size:  f64,
    pub total_rows: usize,
    pub kept_rows:  usize,
    pub train_rows: usize,
    pub test_rows:  usize,
    pub output_dir: PathBuf,
}

// ─── IngestUseCase ────────────────────────────────────────────────────────────
pub struct IngestUseCase {
    config: IngestConfig,
    source: Box<dyn DatasetSource>,
    sink:   Box<dyn DatasetSink>,
}

impl IngestUseCase {
    /// Create a use case backed by the CSV loader and CSV persister
    pub fn new(config: IngestConfig) -> Self {
        Self::with_io(config, Box::new(CsvLoader::new()), Box::new(CsvPersister::new()))
    }

    /// Create a use case with explicit loader and persister implementations
    pub fn with_io(
        config: IngestConfig,
        source: Box<dyn DatasetSource>,
        sink:   Box<dyn DatasetSink>,
    ) -> Self {
        Self { config, source, sink }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Execute the full ingestion pipeline end to end
    pub fn execute(&self) -> Result<IngestSummary, IngestError> {
        let cfg = &self.config;

        // ── Step 1: Parameters ────────────────────────────────────────────────
        let params    = load_params(&cfg.params_path)?;
        let test_size = params.test_size().map_err(|e| {
            tracing::error!(kind = %e.kind(), "Invalid parameters in {}: {}", cfg.params_path.display(), e);
            e
        })?;
        tracing::info!("Using test_size={} from {}", test_size, cfg.params_path.display());

        // ── Step 2: Load the raw dataset ──────────────────────────────────────
        let raw        = self.source.load_data(&cfg.data_url)?;
        let total_rows = raw.row_count();
        tracing::info!("Loaded {} rows from {}", total_rows, cfg.data_url);

        // ── Step 3: Drop identifier, filter and encode labels ────────────────
        let dataset   = Preprocessor::new(cfg.labels.clone()).preprocess(raw)?;
        let kept_rows = dataset.len();
        tracing::info!(
            "Kept {} of {} rows labelled '{}' or '{}'",
            kept_rows,
            total_rows,
            cfg.labels.positive,
            cfg.labels.negative,
        );

        // ── Step 4: Fail early if nothing useful survived ────────────────────
        split_sizes(kept_rows, test_size).map_err(|e| {
            tracing::error!(kind = %e.kind(), "Cannot split preprocessed data: {}", e);
            e
        })?;

        // ── Step 5: Seeded train/test split ───────────────────────────────────
        let (train, test) = split_dataset(dataset, test_size, SPLIT_SEED)?;

        // ── Step 6: Persist ───────────────────────────────────────────────────
        let output_dir = self.sink.save(&train, &test, &cfg.data_dir)?;

        let summary = IngestSummary {
            test_size,
            total_rows,
            kept_rows,
            train_rows: train.len(),
            test_rows:  test.len(),
            output_dir,
        };
        tracing::info!(
            "Data ingestion completed: {} train, {} test rows in {}",
            summary.train_rows,
            summary.test_rows,
            summary.output_dir.display(),
        );
        Ok(summary)
    }
}
