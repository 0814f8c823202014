//! Content document retrieval
//!
//! Documents come from an http(s) base URL or a local directory. Failures of
//! any kind are logged and reported as an absent document: callers skip the
//! section instead of failing the page.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::helpers::{is_remote, join_url};

/// Why a document could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where content documents live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Dir(PathBuf),
    Url(String),
}

impl ContentSource {
    /// Interpret a configured location; relative paths resolve against `base_dir`
    pub fn parse(location: &str, base_dir: &std::path::Path) -> Self {
        if is_remote(location) {
            ContentSource::Url(location.to_string())
        } else {
            ContentSource::Dir(base_dir.join(location))
        }
    }

    /// Human-readable location of a document
    pub fn locate(&self, path: &str) -> String {
        match self {
            ContentSource::Dir(dir) => dir.join(path).display().to_string(),
            ContentSource::Url(base) => join_url(base, path),
        }
    }
}

/// Retrieves and decodes JSON documents
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    source: ContentSource,
    client: reqwest::Client,
}

impl ContentFetcher {
    /// Create a fetcher; `timeout` of `None` never gives up on a request
    pub fn new(source: ContentSource, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            source,
            client: builder.build()?,
        })
    }

    /// Fetch and decode one document, or `None` with a logged diagnostic
    pub async fn fetch_document<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        match self.try_fetch(path).await {
            Ok(doc) => {
                tracing::debug!("Loaded {}", self.source.locate(path));
                Some(doc)
            }
            Err(e) => {
                tracing::warn!("Error loading {}: {}", self.source.locate(path), e);
                None
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let body = match &self.source {
            ContentSource::Dir(dir) => {
                let full = dir.join(path);
                match tokio::fs::read_to_string(&full).await {
                    Ok(body) => body,
                    Err(source) => return Err(FetchError::Io { path: full, source }),
                }
            }
            ContentSource::Url(base) => {
                let url = join_url(base, path);
                let response = self.client.get(&url).send().await?;
                if !response.status().is_success() {
                    return Err(FetchError::Status {
                        url,
                        status: response.status().as_u16(),
                    });
                }
                response.text().await?
            }
        };

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Award;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_content_source_parse() {
        let base = std::path::Path::new("/site");
        assert_eq!(
            ContentSource::parse("https://cdn.example.com", base),
            ContentSource::Url("https://cdn.example.com".to_string())
        );
        assert_eq!(
            ContentSource::parse("data", base),
            ContentSource::Dir(PathBuf::from("/site/data"))
        );
    }

    #[tokio::test]
    async fn test_fetch_from_dir() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(
            dir.path().join("content/awards.json"),
            r#"[{"title": "X", "description": "Y"}]"#,
        )
        .unwrap();

        let fetcher =
            ContentFetcher::new(ContentSource::Dir(dir.path().to_path_buf()), None).unwrap();
        let awards: Option<Vec<Award>> = fetcher.fetch_document("content/awards.json").await;
        assert_eq!(awards.unwrap()[0].title, "X");
    }

    #[tokio::test]
    async fn test_missing_and_malformed_are_absent() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let fetcher =
            ContentFetcher::new(ContentSource::Dir(dir.path().to_path_buf()), None).unwrap();
        let missing: Option<Vec<Award>> = fetcher.fetch_document("nope.json").await;
        assert!(missing.is_none());
        let broken: Option<Vec<Award>> = fetcher.fetch_document("broken.json").await;
        assert!(broken.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_absent() {
        let fetcher = ContentFetcher::new(
            ContentSource::Url("http://127.0.0.1:9".to_string()),
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        let doc: Option<Vec<Award>> = fetcher.fetch_document("content/awards.json").await;
        assert!(doc.is_none());
    }
}
