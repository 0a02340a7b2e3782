// ============================================================
// Layer 6 — Logging Context
// ============================================================
// One tracing subscriber per ingestion run, with two sinks that
// are each attached exactly once:
//
//   console    stdout, filtered by RUST_LOG
//              (data_ingestion=debug when unset)
//   error log  append-only file, ERROR events only, no ANSI
//
// The subscriber is installed for the current thread and removed
// again when the returned LogGuard is dropped, which also flushes
// the non-blocking file writer.
//
// Reference: tracing-subscriber crate documentation
//            tracing-appender crate documentation

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use tracing::subscriber::DefaultGuard;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter, Registry};

/// Console filter used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "data_ingestion=debug";

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The error log path has no file name component.
    #[error("Invalid error log path {0}")]
    InvalidPath(PathBuf),
    /// Failed to create the directory holding the error log.
    #[error("Failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create or open the error log file.
    #[error("Failed to open error log at {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Keeps the run's subscriber installed and the file writer alive.
///
/// Dropping it uninstalls the subscriber and flushes pending error lines.
pub struct LogGuard {
    _default: DefaultGuard,
    _worker: WorkerGuard,
}

/// Install console + error-file logging for the current thread.
pub fn init(error_log: &Path) -> Result<LogGuard, LoggingError> {
    let file_name = error_log
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(error_log.to_path_buf()))?;
    let log_dir = match error_log.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.clone(),
        source,
    })?;
    ensure_file_exists(error_log)?;

    let file_appender = rolling::never(&log_dir, file_name);
    let (file_writer, worker) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(build_env_filter());
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer)
        .with_filter(LevelFilter::ERROR);

    let subscriber = Registry::default().with(console_layer).with(file_layer);
    let default = tracing::subscriber::set_default(subscriber);

    tracing::debug!("Logging initialized; error log at {}", error_log.display());
    Ok(LogGuard {
        _default: default,
        _worker: worker,
    })
}

fn ensure_file_exists(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_error_log_receives_only_errors() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("logs").join("error.log");

        let guard = init(&path).unwrap();
        tracing::debug!("debug line should stay on the console");
        tracing::error!("stage failed: boom");
        drop(guard);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("stage failed: boom"));
        assert!(contents.contains("ERROR"));
        assert!(!contents.contains("debug line"));
    }

    #[test]
    fn test_error_log_is_appended_across_runs() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("error.log");

        for run in 0..2 {
            let guard = init(&path).unwrap();
            tracing::error!("run {run} failed");
            drop(guard);
        }

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("run 0 failed"));
        assert!(contents.contains("run 1 failed"));
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        assert!(matches!(init(Path::new("/")), Err(LoggingError::InvalidPath(_))));
    }
}
