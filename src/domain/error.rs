// ============================================================
// Layer 3 — Ingestion Error Taxonomy
// ============================================================
// One variant per failure kind a pipeline stage can signal.
// Every variant records what triggered it (a file, a column,
// a resource location) and, when there is one, the underlying
// cause as its `source()`.
//
//   Stage            Variants
//   ───────────────  ─────────────────────────────────────────
//   params loading   ConfigNotFound, ConfigParse, Config
//   dataset loading  Load, Parse
//   preprocessing    MissingColumn, Preprocess
//   splitting        InsufficientData (and Config for a bad fraction)
//   persisting       Persist
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            thiserror crate documentation

use std::{fmt, path::PathBuf};

/// Errors produced by the ingestion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The parameter file does not exist.
    #[error("parameter file not found: {path}")]
    ConfigNotFound {
        path:   PathBuf,
        source: std::io::Error,
    },

    /// The parameter file is not valid YAML.
    #[error("invalid YAML in parameter file {path}: {source}")]
    ConfigParse {
        path:   PathBuf,
        source: serde_yaml::Error,
    },

    /// Any other configuration problem: unreadable file, missing key,
    /// a `test_size` that is not a number in (0, 1).
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source:  Option<std::io::Error>,
    },

    /// The dataset could not be retrieved (network, missing file, encoding).
    #[error("failed to load data from {location}: {reason}")]
    Load {
        location: String,
        reason:   String,
        #[source]
        source:   Box<dyn std::error::Error + Send + Sync>,
    },

    /// The dataset was retrieved but is not well-formed CSV.
    #[error("failed to parse CSV from {location}: {source}")]
    Parse {
        location: String,
        source:   csv::Error,
    },

    /// A required column is absent from the dataset.
    #[error("missing column in the dataset: '{0}'")]
    MissingColumn(String),

    /// Any other preprocessing failure.
    #[error("preprocessing failed: {0}")]
    Preprocess(String),

    /// Too few rows to produce a non-empty train and test partition.
    #[error("insufficient data: {rows} row(s) cannot be split with test_size={test_size}")]
    InsufficientData { rows: usize, test_size: f64 },

    /// Writing the split to disk failed.
    #[error("failed to save data to {path}: {source}")]
    Persist {
        path:   PathBuf,
        source: std::io::Error,
    },
}

/// Stable name of an [`IngestError`] variant, used as a log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigNotFound,
    ConfigParse,
    Config,
    Load,
    Parse,
    MissingColumn,
    Preprocess,
    InsufficientData,
    Persist,
}

impl IngestError {
    /// Shorthand for a [`IngestError::Config`] with no underlying io error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into(), source: None }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigNotFound { .. }   => ErrorKind::ConfigNotFound,
            Self::ConfigParse { .. }      => ErrorKind::ConfigParse,
            Self::Config { .. }           => ErrorKind::Config,
            Self::Load { .. }             => ErrorKind::Load,
            Self::Parse { .. }            => ErrorKind::Parse,
            Self::MissingColumn(_)        => ErrorKind::MissingColumn,
            Self::Preprocess(_)           => ErrorKind::Preprocess,
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::Persist { .. }          => ErrorKind::Persist,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
