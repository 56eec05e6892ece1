//! Failure variants of a streaming image fetch.

use thiserror::Error;

/// Why an image download did not produce an artifact.
///
/// Every variant leaves no partial file behind; the fetcher discards its
/// temporary resource before returning.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("download exceeds size limit: {size_bytes} bytes")]
    TooLarge { size_bytes: u64 },

    #[error("URL does not point to an image: {declared}")]
    WrongContentType { declared: String },

    #[error("download timed out")]
    Timeout,

    #[error("network error: {detail}")]
    Network { detail: String },

    #[error("downloaded file is empty or corrupt")]
    EmptyOrCorrupt,
}

impl FetchError {
    /// Creates a network error.
    #[must_use]
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    /// Creates a wrong-content-type error.
    #[must_use]
    pub fn wrong_type(declared: impl Into<String>) -> Self {
        Self::WrongContentType {
            declared: declared.into(),
        }
    }
}
