//! Template fetching.
//!
//! # Responsibilities
//! - Resolve a template reference (path) to its text
//! - Treat non-success HTTP status as a hard failure for that navigation
//!
//! # Design Decisions
//! - `TemplateFetcher` is a dyn-compatible async trait so the router can be
//!   wired to the filesystem in tests and to HTTP in a browser-like host
//! - Fetchers return typed errors; containment (error fragment, empty
//!   string) is the caller's decision

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching a template.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Filesystem read failed (missing template, permissions).
    #[error("template read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Network-level HTTP failure (connect, timeout, body read).
    #[error("template request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("template request returned status {0}")]
    Status(u16),
}

/// Source of template text, keyed by template reference.
#[async_trait]
pub trait TemplateFetcher: Send + Sync {
    /// Fetch the template at `path` as text.
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

/// Reads templates from a directory tree. The default for the demo binary
/// and for tests.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    /// Create a fetcher rooted at the given template directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TemplateFetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full = self.root.join(path.trim_start_matches('/'));
        let html = tokio::fs::read_to_string(&full).await?;
        Ok(html)
    }
}

/// Fetches templates over plain HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher for templates served under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TemplateFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fs_fetcher_reads_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("home.html");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "<h1>Início</h1>").unwrap();

        let fetcher = FsFetcher::new(dir.path());
        let html = fetcher.fetch("home.html").await.unwrap();
        assert_eq!(html, "<h1>Início</h1>");

        // Leading slash in the reference is tolerated.
        let html = fetcher.fetch("/home.html").await.unwrap();
        assert_eq!(html, "<h1>Início</h1>");
    }

    #[tokio::test]
    async fn test_fs_fetcher_missing_template_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FsFetcher::new(dir.path());
        let err = fetcher.fetch("nope.html").await.unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }
}
