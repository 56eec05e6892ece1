//! Streaming image downloader enforcing size and content-type limits.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use url::Url;

use super::headers::{browser_headers, USER_AGENT};
use crate::domain::entities::{FetchedImage, TemporaryArtifact};
use crate::domain::errors::FetchError;
use crate::domain::extension::ImageExtension;
use crate::domain::ports::ImageFetcherPort;
use crate::domain::{FETCH_TIMEOUT_SECS, SIZE_CEILING_BYTES};

/// Downloads images over HTTP into scoped temporary files.
///
/// The declared content-length is only a hint; the running byte counter is
/// the authoritative size limit and aborts the stream as soon as it is
/// exceeded.
pub struct StreamingFetcher {
    client: Client,
    size_ceiling: u64,
}

impl StreamingFetcher {
    /// Creates a fetcher with the default 20 MiB ceiling and 30 s timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_limits(SIZE_CEILING_BYTES, Duration::from_secs(FETCH_TIMEOUT_SECS))
    }

    /// Creates a fetcher with explicit limits.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_limits(size_ceiling: u64, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            size_ceiling,
        })
    }

    fn map_transport_error(e: &reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::network("failed to connect to host")
        } else {
            FetchError::network(e.to_string())
        }
    }
}

#[async_trait]
impl ImageFetcherPort for StreamingFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError> {
        let target =
            Url::parse(url).map_err(|e| FetchError::network(format!("invalid URL: {e}")))?;

        let response = self
            .client
            .get(target.clone())
            .headers(browser_headers(&target))
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Request failed");
                Self::map_transport_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::network(format!(
                "HTTP {status}: {}",
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase);

        // A missing header means "unknown, proceed"; only a declared
        // non-image type rejects before the body is read.
        if let Some(declared) = &content_type {
            if !declared.starts_with("image/") {
                return Err(FetchError::wrong_type(declared.clone()));
            }
        }

        if let Some(declared_len) = response.content_length() {
            if declared_len > self.size_ceiling {
                debug!(url = %url, declared = declared_len, "Declared length over ceiling");
                return Err(FetchError::TooLarge {
                    size_bytes: declared_len,
                });
            }
        }

        let extension = ImageExtension::resolve(url, content_type.as_deref());

        let tmp = tempfile::Builder::new()
            .suffix(extension.suffix())
            .tempfile()
            .map_err(|e| FetchError::network(format!("failed to create temp file: {e}")))?;
        let std_handle = tmp
            .reopen()
            .map_err(|e| FetchError::network(format!("failed to open temp file: {e}")))?;
        let mut out = tokio::fs::File::from_std(std_handle);

        // Dropping `tmp` on any early return below removes the partial file.
        let mut counted: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Self::map_transport_error(&e))?;
            counted += chunk.len() as u64;
            if counted > self.size_ceiling {
                debug!(url = %url, streamed = counted, "Stream exceeded ceiling, aborting");
                return Err(FetchError::TooLarge {
                    size_bytes: counted,
                });
            }
            out.write_all(&chunk)
                .await
                .map_err(|e| FetchError::network(format!("failed to write temp file: {e}")))?;
        }
        out.flush()
            .await
            .map_err(|e| FetchError::network(format!("failed to flush temp file: {e}")))?;

        if counted == 0 {
            return Err(FetchError::EmptyOrCorrupt);
        }

        debug!(url = %url, size = counted, extension = extension.suffix(), "Download complete");

        Ok(FetchedImage::new(TemporaryArtifact::new(
            tmp, counted, extension,
        )))
    }
}
