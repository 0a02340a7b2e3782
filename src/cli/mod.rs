// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All pipeline logic is delegated to Layer 2 (application).
//
// This layer is also the single top-level error boundary: a
// failed run is logged once more at error level, reported to the
// user as one `Error: ...` line, and turned into a non-zero exit
// status by main.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, IngestArgs};

use crate::application::ingest_use_case::IngestUseCase;
use crate::infra::logging;

/// The main CLI struct — clap generates the argument parser
/// from these fields via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "data-ingestion",
    version,
    about = "Fetch a labelled tweet CSV, encode happiness/sadness as 1/0 and save a seeded train/test split."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Ingest(args) => run_ingest(args),
        }
    }
}

/// Handles the `ingest` subcommand.
///
/// The logging context lives exactly as long as this call.
fn run_ingest(args: IngestArgs) -> Result<()> {
    let _log = logging::init(&args.error_log)?;

    // Convert CLI args → application config
    let use_case = IngestUseCase::new(args.into());
    tracing::info!(
        "Starting data ingestion from {} into {}",
        use_case.config().data_url,
        use_case.config().data_dir.display()
    );

    match use_case.execute() {
        Ok(summary) => {
            println!(
                "Kept {} of {} rows; saved {} train and {} test rows (test_size={}) to {}",
                summary.kept_rows,
                summary.total_rows,
                summary.train_rows,
                summary.test_rows,
                summary.test_size,
                summary.output_dir.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                kind = %e.kind(),
                "Failed to complete the data ingestion process: {}",
                e
            );
            Err(e.into())
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_failed_run_is_reported_and_logged() {
        let dir       = tempdir().unwrap();
        let params    = dir.path().join("missing.yaml");
        let error_log = dir.path().join("logs").join("error.log");
        let data_dir  = dir.path().join("data");

        let cli = Cli::try_parse_from([
            "data-ingestion",
            "ingest",
            "--params",
            params.to_str().unwrap(),
            "--data-dir",
            data_dir.to_str().unwrap(),
            "--error-log",
            error_log.to_str().unwrap(),
        ])
        .unwrap();

        let err = cli.run().unwrap_err();
        assert!(err.to_string().contains("parameter file not found"));

        // The log guard is dropped when run() returns, so the file is flushed
        let contents = fs::read_to_string(&error_log).unwrap();
        assert!(contents.contains("Failed to complete the data ingestion process"));
        assert!(contents.contains("ERROR"));
        assert!(!data_dir.exists());
    }
}
