//! Flowdiff Source
//!
//! Retrieval of the two flow documents a comparison needs. The GraphSource
//! trait defines the contract; concrete sources fetch from a hosted
//! repository over HTTP, from a local mirror on disk, or from memory.

use std::future::Future;

use async_trait::async_trait;
use thiserror::Error;

pub mod fs;
pub mod http;
pub mod locator;
pub mod memory;

pub use fs::{read_path, FsGraphSource};
pub use http::HttpGraphSource;
pub use locator::{is_compare_page, FileLocator};
pub use memory::InMemoryGraphSource;

/// Errors that can occur while retrieving a flow document
#[derive(Error, Debug)]
pub enum SourceError {
    /// The server answered with a non-success status, or never answered
    #[error("File download error: url={url}{}", status_suffix(.status))]
    Download {
        /// Raw file URL
        url: String,
        /// `"<code> <reason>"`, absent when the request itself failed
        status: Option<String>,
    },

    /// The request was abandoned before a response arrived
    #[error("File download canceled: url={url}")]
    Canceled {
        /// Raw file URL
        url: String,
    },

    /// Reading a local file failed for a reason other than it not existing
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),
}

impl SourceError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SourceError::Download { .. } => "ERR_SOURCE_DOWNLOAD",
            SourceError::Canceled { .. } => "ERR_SOURCE_CANCELED",
            SourceError::Io { .. } => "ERR_SOURCE_IO",
            SourceError::Client(_) => "ERR_SOURCE_CLIENT",
        }
    }
}

fn status_suffix(status: &Option<String>) -> String {
    match status {
        Some(status) => format!(", status=\"{}\"", status),
        None => String::new(),
    }
}

/// Result type for GraphSource operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Trait defining the contract for flow document sources
#[async_trait]
pub trait GraphSource: Send + Sync + std::fmt::Debug {
    /// Fetch the text of one document. `Ok(None)` means the file does not
    /// exist on that side of the comparison.
    async fn fetch(&self, locator: &FileLocator) -> SourceResult<Option<String>>;
}

/// Fetch the base and compare documents concurrently.
///
/// Returns only once both sides have completed. An absent locator yields an
/// absent side without touching the source.
pub async fn fetch_pair<S>(
    source: &S,
    base: Option<&FileLocator>,
    compare: Option<&FileLocator>,
) -> SourceResult<(Option<String>, Option<String>)>
where
    S: GraphSource + ?Sized,
{
    join_sides(
        base.map(|locator| source.fetch(locator)),
        compare.map(|locator| source.fetch(locator)),
    )
    .await
}

/// Drive the loads of both sides to completion together.
///
/// A side without a load is absent. The first error, base before compare,
/// is returned once both loads have finished.
pub async fn join_sides<F, T, E>(
    base: Option<F>,
    compare: Option<F>,
) -> Result<(Option<T>, Option<T>), E>
where
    F: Future<Output = Result<Option<T>, E>>,
{
    let (base, compare) = tokio::join!(load_side(base), load_side(compare));
    Ok((base?, compare?))
}

async fn load_side<F, T, E>(load: Option<F>) -> Result<Option<T>, E>
where
    F: Future<Output = Result<Option<T>, E>>,
{
    match load {
        Some(load) => load.await,
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(reference: &str) -> FileLocator {
        FileLocator::new("git.example.com", "acme", "flows", reference, "pipeline.json")
    }

    #[test]
    fn test_download_error_messages() {
        let with_status = SourceError::Download {
            url: "https://h/o/r/raw/main/f.json".to_string(),
            status: Some("500 Internal Server Error".to_string()),
        };
        assert_eq!(
            with_status.to_string(),
            "File download error: url=https://h/o/r/raw/main/f.json, status=\"500 Internal Server Error\""
        );

        let without_status = SourceError::Download {
            url: "https://h/o/r/raw/main/f.json".to_string(),
            status: None,
        };
        assert_eq!(
            without_status.to_string(),
            "File download error: url=https://h/o/r/raw/main/f.json"
        );
        assert_eq!(without_status.error_code(), "ERR_SOURCE_DOWNLOAD");
    }

    #[tokio::test]
    async fn test_fetch_pair_both_sides() {
        let base = locator("main");
        let compare = locator("feature");
        let source = InMemoryGraphSource::new();
        source.insert(&base, "base text").await;
        source.insert(&compare, "compare text").await;

        let (base_text, compare_text) = fetch_pair(&source, Some(&base), Some(&compare))
            .await
            .unwrap();
        assert_eq!(base_text.as_deref(), Some("base text"));
        assert_eq!(compare_text.as_deref(), Some("compare text"));
    }

    #[tokio::test]
    async fn test_join_sides_reports_base_error_first() {
        let failing = |side: &'static str| async move { Err::<Option<String>, _>(side) };
        let err = join_sides(Some(failing("base")), Some(failing("compare")))
            .await
            .unwrap_err();
        assert_eq!(err, "base");
    }

    #[tokio::test]
    async fn test_fetch_pair_missing_and_unspecified_sides() {
        let compare = locator("feature");
        let source = InMemoryGraphSource::new();
        source.insert(&compare, "compare text").await;

        let (base_text, compare_text) = fetch_pair(&source, Some(&locator("main")), Some(&compare))
            .await
            .unwrap();
        assert!(base_text.is_none());
        assert_eq!(compare_text.as_deref(), Some("compare text"));

        let (base_text, compare_text) = fetch_pair(&source, None, None).await.unwrap();
        assert!(base_text.is_none() && compare_text.is_none());
    }
}
