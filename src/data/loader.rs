// ============================================================
// Layer 4 — CSV Dataset Loader
// ============================================================
// Loads a CSV resource into a raw Table. The location may be:
//
//   https://host/path/file.csv   → one blocking HTTP GET (ureq)
//   ./local/file.csv             → read from disk
//
// The resource is read fully into memory, decoded as UTF-8 and
// then parsed with the csv crate. The first record becomes the
// header row; every following record must have the same number
// of fields.
//
// Failure mapping:
//   network error / HTTP status / missing file / bad UTF-8  → Load
//   ragged rows / no header row                             → Parse
//
// There is no retry: the first failure is returned.
//
// Reference: csv crate documentation
//            ureq crate documentation
//            Rust Book §9 (Error Handling)

use std::{fs, io::Read, sync::OnceLock, time::Duration};

use csv::ReaderBuilder;

use crate::domain::error::IngestError;
use crate::domain::table::Table;
use crate::domain::traits::DatasetSource;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Loads CSV data from a URL or a local path.
/// Implements the DatasetSource trait from Layer 3.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvLoader;

impl CsvLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetSource for CsvLoader {
    fn load_data(&self, location: &str) -> Result<Table, IngestError> {
        let result = fetch(location).and_then(|text| parse_csv(location, &text));
        match &result {
            Ok(table) => tracing::debug!(
                "Data loaded from {} ({} rows, {} columns)",
                location,
                table.row_count(),
                table.column_count(),
            ),
            Err(e) if matches!(e, IngestError::Parse { .. }) => {
                tracing::error!(kind = %e.kind(), "Failed to parse the CSV file: {}", e)
            }
            Err(e) => {
                tracing::error!(kind = %e.kind(), "Unexpected error while loading the data: {}", e)
            }
        }
        result
    }
}

fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Retrieve the raw bytes behind `location` and decode them as UTF-8.
fn fetch(location: &str) -> Result<String, IngestError> {
    let load_err = |reason: String, source: Box<dyn std::error::Error + Send + Sync>| {
        IngestError::Load {
            location: location.to_string(),
            reason,
            source,
        }
    };

    let bytes = if is_remote(location) {
        let response = agent()
            .get(location)
            .call()
            .map_err(|e| load_err(e.to_string(), Box::new(e)))?;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| load_err(format!("failed to read response body: {e}"), Box::new(e)))?;
        bytes
    } else {
        fs::read(location).map_err(|e| load_err(e.to_string(), Box::new(e)))?
    };

    String::from_utf8(bytes)
        .map_err(|e| load_err(format!("content is not valid UTF-8: {e}"), Box::new(e)))
}

/// Shared HTTP agent with fixed connect/read timeouts.
fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .build()
    })
}

/// Parse decoded CSV text into a Table.
pub fn parse_csv(location: &str, text: &str) -> Result<Table, IngestError> {
    let parse_err = |source: csv::Error| IngestError::Parse {
        location: location.to_string(),
        source,
    };

    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(parse_err(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no columns to parse from file",
        ))));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;
    use std::error::Error;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;
    use tempfile::NamedTempFile;

    const TWEETS: &str = "tweet_id,sentiment,content\n\
                          1,happiness,\"hello, world\"\n\
                          2,sadness,b\n";

    fn write_csv(text: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(text).unwrap();
        f
    }

    /// Serve a single HTTP response on a random local port, return its URL.
    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr     = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/tweets.csv")
    }

    #[test]
    fn test_loads_local_file() {
        let f     = write_csv(TWEETS.as_bytes());
        let table = CsvLoader::new().load_data(f.path().to_str().unwrap()).unwrap();
        assert_eq!(table.headers, vec!["tweet_id", "sentiment", "content"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][2], "hello, world");
    }

    #[test]
    fn test_strips_bom() {
        let table = parse_csv("mem", "\u{FEFF}tweet_id,sentiment\n1,sadness\n").unwrap();
        assert_eq!(table.headers[0], "tweet_id");
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = CsvLoader::new().load_data("/nonexistent/tweets.csv").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
    }

    #[test]
    fn test_load_error_keeps_io_cause() {
        let err   = CsvLoader::new().load_data("/nonexistent/tweets.csv").unwrap_err();
        let cause = err.source().expect("load error should carry its cause");
        let io    = cause.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_invalid_utf8_is_load_error() {
        let f   = write_csv(b"tweet_id,sentiment\n1,\xff\xfe\n");
        let err = CsvLoader::new().load_data(f.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
        assert!(err.source().unwrap().is::<std::string::FromUtf8Error>());
    }

    #[test]
    fn test_ragged_rows_are_parse_error() {
        let err = parse_csv("mem", "a,b,c\n1,2\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_empty_content_is_parse_error() {
        let err = parse_csv("mem", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_header_only_gives_zero_rows() {
        let table = parse_csv("mem", "tweet_id,sentiment,content\n").unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_loads_over_http() {
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            TWEETS.len(),
            TWEETS
        ));
        let table = CsvLoader::new().load_data(&url).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1][1], "sadness");
    }

    #[test]
    fn test_http_error_status_is_load_error() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
        );
        let err = CsvLoader::new().load_data(&url).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Load);
    }
}
