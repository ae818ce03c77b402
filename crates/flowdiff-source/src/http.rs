//! HTTP implementation of GraphSource
//!
//! Downloads raw files from a hosted repository with a plain GET.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::{FileLocator, GraphSource, SourceError, SourceResult};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches raw files over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpGraphSource {
    /// Replaces `https://<host>` when set
    base_url: Option<String>,

    /// HTTP client
    client: Client,
}

impl HttpGraphSource {
    /// Create a new source with the given request timeout
    pub fn new(timeout: Duration) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            base_url: None,
            client,
        })
    }

    /// Serve every locator from `base_url` instead of its own host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The URL a locator is downloaded from
    pub fn url_for(&self, locator: &FileLocator) -> String {
        match &self.base_url {
            Some(base_url) => locator.raw_url_on(base_url),
            None => locator.raw_url(),
        }
    }

    /// Download an arbitrary URL. `Ok(None)` on 404.
    pub async fn fetch_url(&self, url: &str) -> SourceResult<Option<String>> {
        debug!("Downloading {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => {
                debug!("No file at {}", url);
                Ok(None)
            }
            status if status.is_success() => {
                let text = response
                    .text()
                    .await
                    .map_err(|e| transport_error(url, e))?;
                Ok(Some(text))
            }
            _ => {
                let status = format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                );
                warn!("Download of {} failed with status {}", url, status);
                Err(SourceError::Download {
                    url: url.to_string(),
                    status: Some(status),
                })
            }
        }
    }
}

/// A timeout at any stage, headers or body, is a cancel
fn transport_error(url: &str, e: reqwest::Error) -> SourceError {
    warn!("Download of {} failed: {}", url, e);
    if e.is_timeout() {
        SourceError::Canceled {
            url: url.to_string(),
        }
    } else {
        SourceError::Download {
            url: url.to_string(),
            status: None,
        }
    }
}

#[async_trait]
impl GraphSource for HttpGraphSource {
    async fn fetch(&self, locator: &FileLocator) -> SourceResult<Option<String>> {
        let url = self.url_for(locator);
        self.fetch_url(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn locator() -> FileLocator {
        FileLocator::new("github.com", "acme", "flows", "main", "order.json")
    }

    // Point the source at the mock server
    fn create_test_source(mock_server: &MockServer) -> HttpGraphSource {
        HttpGraphSource::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .unwrap()
            .with_base_url(mock_server.uri())
    }

    #[test]
    fn test_url_for_without_override() {
        let source = HttpGraphSource::new(Duration::from_secs(5)).unwrap();
        assert_eq!(
            source.url_for(&locator()),
            "https://github.com/acme/flows/raw/main/order.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/acme/flows/raw/main/order.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"nodes\": {}}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let source = create_test_source(&mock_server);
        let text = source.fetch(&locator()).await.unwrap();
        assert_eq!(text.as_deref(), Some("{\"nodes\": {}}"));
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_absent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let source = create_test_source(&mock_server);
        assert!(source.fetch(&locator()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let source = create_test_source(&mock_server);
        let err = source.fetch(&locator()).await.unwrap_err();
        let url = format!("{}/acme/flows/raw/main/order.json", mock_server.uri());
        assert_eq!(
            err.to_string(),
            format!(
                "File download error: url={}, status=\"500 Internal Server Error\"",
                url
            )
        );
        assert_eq!(err.error_code(), "ERR_SOURCE_DOWNLOAD");
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_canceled() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let source = HttpGraphSource::new(Duration::from_millis(100))
            .unwrap()
            .with_base_url(mock_server.uri());
        let err = source.fetch(&locator()).await.unwrap_err();
        assert!(matches!(err, SourceError::Canceled { .. }));
    }

    #[tokio::test]
    async fn test_body_stall_is_canceled() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            // headers promise 100 bytes, then the body stalls after one
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{")
                .await;
            let _ = socket.flush().await;
            tokio::time::sleep(Duration::from_secs(3)).await;
        });

        let source = HttpGraphSource::new(Duration::from_millis(300)).unwrap();
        let url = format!("http://{}/f.json", addr);
        let err = source.fetch_url(&url).await.unwrap_err();
        match err {
            SourceError::Canceled { url: canceled } => assert_eq!(canceled, url),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let source = HttpGraphSource::new(Duration::from_secs(2))
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let err = source.fetch(&locator()).await.unwrap_err();
        match err {
            SourceError::Download { url, status } => {
                assert_eq!(url, "http://127.0.0.1:9/acme/flows/raw/main/order.json");
                assert!(status.is_none());
            }
            SourceError::Canceled { .. } => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
