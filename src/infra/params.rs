// ============================================================
// Layer 6 — Parameter Loader
// ============================================================
// Reads the YAML parameter file shared by the pipeline stages:
//
//   data_ingestion:
//     test_size: 0.2
//
// The document is kept as an opaque serde_yaml::Value; the only
// key this job consumes is `data_ingestion.test_size`, resolved
// on demand by Params::test_size().
//
// Failure mapping:
//   file does not exist        → ConfigNotFound
//   content is not valid YAML  → ConfigParse
//   anything else              → Config
//
// Reference: serde_yaml crate documentation
//            Rust Book §9 (Error Handling)

use std::{fs, io, path::Path};

use serde_yaml::Value;

use crate::domain::error::IngestError;

/// Key path of the test-split fraction inside the parameter file
pub const TEST_SIZE_KEY: [&str; 2] = ["data_ingestion", "test_size"];

/// Parsed parameter file.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    root: Value,
}

impl Params {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Walk a nested key path, returning `None` if any segment is absent.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.root, |node, key| node.get(*key))
    }

    /// The test-split fraction, required to be a number in (0, 1).
    pub fn test_size(&self) -> Result<f64, IngestError> {
        let dotted = TEST_SIZE_KEY.join(".");
        let value  = self
            .get(&TEST_SIZE_KEY)
            .ok_or_else(|| IngestError::config(format!("missing required key '{dotted}'")))?;

        let fraction = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _                => None,
        }
        .ok_or_else(|| IngestError::config(format!("'{dotted}' is not a number: {value:?}")))?;

        if fraction > 0.0 && fraction < 1.0 {
            Ok(fraction)
        } else {
            Err(IngestError::config(format!(
                "'{dotted}' must be in the open interval (0, 1), got {fraction}"
            )))
        }
    }
}

/// Load the YAML parameter file at `path`.
pub fn load_params(path: &Path) -> Result<Params, IngestError> {
    match read_params(path) {
        Ok(params) => {
            tracing::debug!("Parameters received from {}", path.display());
            Ok(params)
        }
        Err(e) => {
            match &e {
                IngestError::ConfigNotFound { .. } => {
                    tracing::error!(kind = %e.kind(), "File not found: {}", path.display())
                }
                IngestError::ConfigParse { source, .. } => {
                    tracing::error!(kind = %e.kind(), "YAML error: {}", source)
                }
                _ => tracing::error!(kind = %e.kind(), "Unexpected error: {}", e),
            }
            Err(e)
        }
    }
}

fn read_params(path: &Path) -> Result<Params, IngestError> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => IngestError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::Config {
            message: format!("cannot read parameter file {}", path.display()),
            source:  Some(source),
        },
    })?;

    let root: Value = serde_yaml::from_str(&contents).map_err(|source| IngestError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty document parses as Null; treat it like an empty mapping.
    let root = match root {
        Value::Null => Value::Mapping(Default::default()),
        other       => other,
    };
    Ok(Params::from_value(root))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to write YAML to a temp file and return the handle.
    fn write_yaml(yaml: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(yaml.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_reads_test_size() {
        let f      = write_yaml("data_ingestion:\n  test_size: 0.2\nother:\n  key: 1\n");
        let params = load_params(f.path()).unwrap();
        assert_eq!(params.test_size().unwrap(), 0.2);
        assert_eq!(params.get(&["other", "key"]), Some(&Value::from(1)));
    }

    #[test]
    fn test_string_fraction_is_parsed() {
        let f      = write_yaml("data_ingestion:\n  test_size: \"0.25\"\n");
        let params = load_params(f.path()).unwrap();
        assert_eq!(params.test_size().unwrap(), 0.25);
    }

    #[test]
    fn test_missing_file() {
        let err = load_params(Path::new("/nonexistent/params.yaml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigNotFound);
    }

    #[test]
    fn test_invalid_yaml() {
        let f   = write_yaml("not: [valid: yaml: {{{}}}");
        let err = load_params(f.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigParse);
    }

    #[test]
    fn test_directory_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_params(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_missing_key() {
        let f      = write_yaml("data_ingestion:\n  other: 3\n");
        let params = load_params(f.path()).unwrap();
        assert_eq!(params.test_size().unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn test_empty_document_has_no_test_size() {
        let f      = write_yaml("");
        let params = load_params(f.path()).unwrap();
        assert_eq!(params.test_size().unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn test_out_of_range_and_non_numeric() {
        for yaml in [
            "data_ingestion:\n  test_size: 1.0\n",
            "data_ingestion:\n  test_size: 0\n",
            "data_ingestion:\n  test_size: -0.3\n",
            "data_ingestion:\n  test_size: [0.2]\n",
            "data_ingestion:\n  test_size: abc\n",
        ] {
            let f      = write_yaml(yaml);
            let params = load_params(f.path()).unwrap();
            assert_eq!(params.test_size().unwrap_err().kind(), ErrorKind::Config, "{yaml}");
        }
    }
}
