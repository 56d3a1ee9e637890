// src/fetch/mod.rs
use reqwest::Client;
use std::{fmt, io, path::PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, error, info};
use url::Url;

use crate::parse::{parse, strip_bom};
use crate::table::ParsedTable;

/// Why the raw text could not be obtained. Parsing itself never fails.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("source not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid source URL {0}")]
    InvalidUrl(String),
}

/// Where the delimited text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(Url),
}

impl Source {
    /// `http://` and `https://` strings become URLs, anything else a path.
    pub fn parse(s: &str) -> Result<Self, RetrievalError> {
        let lower = s.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(s.trim()).map_err(|_| RetrievalError::InvalidUrl(s.to_string()))?;
            Ok(Source::Url(url))
        } else {
            Ok(Source::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(p) => write!(f, "{}", p.display()),
            Source::Url(u) => write!(f, "{}", u),
        }
    }
}

/// Read the whole resource as text.
pub async fn fetch_text(client: &Client, source: &Source) -> Result<String, RetrievalError> {
    match source {
        // same BOM handling as `Response::text`
        Source::Path(path) => match fs::read_to_string(path).await {
            Ok(text) => Ok(strip_bom(&text).to_string()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(RetrievalError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(RetrievalError::Io {
                path: path.display().to_string(),
                source: e,
            }),
        },
        Source::Url(url) => {
            let http = |e| RetrievalError::Http {
                url: url.to_string(),
                source: e,
            };
            let resp = client.get(url.clone()).send().await.map_err(http)?;
            let status = resp.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(RetrievalError::NotFound(url.to_string()));
            }
            if !status.is_success() {
                return Err(RetrievalError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            resp.text().await.map_err(http)
        }
    }
}

/// Fetch once and parse.
#[tracing::instrument(level = "info", skip(client, source), fields(source = %source))]
pub async fn load_table(
    client: &Client,
    source: &Source,
    delimiter: char,
) -> Result<ParsedTable, RetrievalError> {
    let text = fetch_text(client, source).await?;
    debug!(bytes = text.len(), "fetched");
    let table = parse(&text, delimiter);
    info!(
        columns = table.header.len(),
        records = table.records.len(),
        "loaded"
    );
    Ok(table)
}

/// [`load_table`], falling back to an empty table so filtering stays
/// well-defined. The error is handed back for the caller to show.
pub async fn load_or_empty(
    client: &Client,
    source: &Source,
    delimiter: char,
) -> (ParsedTable, Option<RetrievalError>) {
    match load_table(client, source, delimiter).await {
        Ok(table) => (table, None),
        Err(e) => {
            error!("retrieval of {} failed: {}", source, e);
            (ParsedTable::empty(), Some(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,insumos::fetch=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    /// Serve a single canned HTTP response on a local port.
    async fn serve_once(status: &'static str, body: &'static str) -> Source {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                req.extend_from_slice(&buf[..n]);
            }
            let resp = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            sock.write_all(resp.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
        });
        Source::parse(&format!("http://{}/insumos.csv", addr)).unwrap()
    }

    #[tokio::test]
    async fn test_http_ok_is_parsed() {
        init_test_logging();
        let source = serve_once("200 OK", "INSUMO;GRUPO\r\nPNEU;PEÇAS E COMPONENTES\r\n").await;
        let table = load_table(&local_client(), &source, ';').await.unwrap();

        assert_eq!(table.header, vec!["INSUMO", "GRUPO"]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].get("INSUMO"), Some("PNEU"));
    }

    #[tokio::test]
    async fn test_http_404_is_not_found() {
        init_test_logging();
        let source = serve_once("404 Not Found", "").await;
        let err = fetch_text(&local_client(), &source).await.unwrap_err();
        assert!(matches!(err, RetrievalError::NotFound(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_http_500_is_status() {
        init_test_logging();
        let source = serve_once("500 Internal Server Error", "boom").await;
        let (table, err) = load_or_empty(&local_client(), &source, ';').await;
        assert!(table.is_empty());
        assert!(
            matches!(err, Some(RetrievalError::Status { status: 500, .. })),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_http_refused_is_transport_error() {
        init_test_logging();
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let source = Source::parse(&format!("http://{}/insumos.csv", addr)).unwrap();
        let err = fetch_text(&local_client(), &source).await.unwrap_err();
        assert!(matches!(err, RetrievalError::Http { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_file_bom_dropped() {
        init_test_logging();
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "\u{feff}INSUMO;GRUPO\nPNEU;PEÇAS\n").unwrap();

        let source = Source::Path(tmp.path().to_path_buf());
        let text = fetch_text(&Client::new(), &source).await.unwrap();
        assert!(text.starts_with("INSUMO"));

        let table = load_table(&Client::new(), &source, ';').await.unwrap();
        assert_eq!(table.header, vec!["INSUMO", "GRUPO"]);
    }

    #[test]
    fn test_source_parse() {
        assert!(matches!(
            Source::parse("https://example.com/insumos.csv").unwrap(),
            Source::Url(_)
        ));
        assert!(matches!(
            Source::parse("HTTP://example.com/a.csv").unwrap(),
            Source::Url(_)
        ));
        assert_eq!(
            Source::parse("data/insumos.csv").unwrap(),
            Source::Path(PathBuf::from("data/insumos.csv"))
        );
        assert!(matches!(
            Source::parse("http://"),
            Err(RetrievalError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        init_test_logging();
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "INSUMO;GRUPO\nPNEU;PEÇAS E COMPONENTES\n").unwrap();

        let client = Client::new();
        let source = Source::Path(tmp.path().to_path_buf());
        let table = load_table(&client, &source, ';').await.unwrap();

        assert_eq!(table.header, vec!["INSUMO", "GRUPO"]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].get("GRUPO"), Some("PEÇAS E COMPONENTES"));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_empty() {
        init_test_logging();
        let dir = tempdir().unwrap();
        let source = Source::Path(dir.path().join("nope.csv"));
        let client = Client::new();

        let err = fetch_text(&client, &source).await.unwrap_err();
        assert!(matches!(err, RetrievalError::NotFound(_)));

        let (table, err) = load_or_empty(&client, &source, ';').await;
        assert!(table.is_empty());
        assert!(err.is_some());
        assert!(table.filter("qualquer").is_empty());
    }
}
