// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `ingest` subcommand and all its flags.
//
// Every flag has a default, so `data-ingestion ingest` on its own
// reads ./params.yaml, downloads the tweet emotion CSV and writes
// ./data/raw/{train,test}.csv.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::ingest_use_case::{IngestConfig, DEFAULT_DATA_URL};
use crate::domain::label::LabelConfig;

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, preprocess, split and save the labelled dataset
    Ingest(IngestArgs),
}

/// All arguments for the `ingest` command.
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// YAML file containing data_ingestion.test_size
    #[arg(long, default_value = "params.yaml")]
    pub params: PathBuf,

    /// URL or local path of the CSV dataset
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    pub data_url: String,

    /// Base directory; output goes to <data-dir>/raw/
    #[arg(long, default_value = "./data")]
    pub data_dir: PathBuf,

    /// Append-only log file receiving error-level entries
    #[arg(long, default_value = "error.log")]
    pub error_log: PathBuf,

    /// Identifier column dropped before splitting
    #[arg(long, default_value = "tweet_id")]
    pub id_column: String,

    /// Column holding the sentiment label
    #[arg(long, default_value = "sentiment")]
    pub label_column: String,

    /// Label value encoded as 1
    #[arg(long, default_value = "happiness")]
    pub positive: String,

    /// Label value encoded as 0
    #[arg(long, default_value = "sadness")]
    pub negative: String,
}

/// Convert CLI IngestArgs into the application-layer IngestConfig.
/// The application layer never sees clap types.
impl From<IngestArgs> for IngestConfig {
    fn from(a: IngestArgs) -> Self {
        IngestConfig {
            params_path: a.params,
            data_url:    a.data_url,
            data_dir:    a.data_dir,
            labels:      LabelConfig {
                id_column:    a.id_column,
                label_column: a.label_column,
                positive:     a.positive,
                negative:     a.negative,
            },
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_defaults_match_fixed_layout() {
        let cli = Cli::try_parse_from(["data-ingestion", "ingest"]).unwrap();
        let Commands::Ingest(args) = cli.command;
        assert_eq!(args.error_log, PathBuf::from("error.log"));

        let config: IngestConfig = args.into();
        assert_eq!(config.params_path, PathBuf::from("params.yaml"));
        assert_eq!(config.data_url,    DEFAULT_DATA_URL);
        assert_eq!(config.data_dir,    PathBuf::from("./data"));
        assert_eq!(config.labels,      LabelConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "data-ingestion", "ingest",
            "--data-url", "tweets.csv",
            "--data-dir", "/tmp/out",
            "--positive", "love",
        ])
        .unwrap();
        let Commands::Ingest(args) = cli.command;
        let config: IngestConfig   = args.into();
        assert_eq!(config.data_url,        "tweets.csv");
        assert_eq!(config.data_dir,        PathBuf::from("/tmp/out"));
        assert_eq!(config.labels.positive, "love");
        assert_eq!(config.labels.negative, "sadness");
    }
}
