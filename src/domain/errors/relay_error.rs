//! User-boundary error taxonomy for one relay operation.

use thiserror::Error;

use super::FetchError;

/// Everything that can end a relay operation short of success.
///
/// Caught at the orchestrator boundary and converted to a single
/// human-readable notification; never propagates past one request.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RelayError {
    #[error("input is not a valid http(s) URL")]
    InvalidUrlFormat,

    #[error("URL does not look like a direct image link")]
    NotImageLike,

    #[error("URL does not point to an image: {declared}")]
    WrongContentType { declared: String },

    #[error("image exceeds size limit: {size_bytes} bytes")]
    Oversize { size_bytes: u64 },

    #[error("downloaded file is empty or corrupt")]
    EmptyOrCorrupt,

    #[error("download timed out")]
    Timeout,

    #[error("network error: {detail}")]
    Network { detail: String },

    #[error("failed to send photo: {detail}")]
    SendFailure { detail: String },

    #[error("unexpected error: {detail}")]
    Unexpected { detail: String },
}

impl RelayError {
    /// Creates a send-failure error.
    #[must_use]
    pub fn send_failure(detail: impl Into<String>) -> Self {
        Self::SendFailure {
            detail: detail.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected {
            detail: detail.into(),
        }
    }

    /// The message shown to the user for this failure.
    ///
    /// Every variant maps to exactly one reply; internal detail beyond what
    /// the user can act on stays in the logs.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrlFormat => {
                "❌ Please send a valid URL starting with http:// or https://".to_string()
            }
            Self::NotImageLike => {
                "❌ This doesn't look like a direct image URL.\nMake sure it ends with .jpg, .png, etc."
                    .to_string()
            }
            Self::WrongContentType { declared } => {
                format!("❌ The URL does not point to an image (got {declared}).")
            }
            Self::Oversize { size_bytes } => {
                let mib = *size_bytes as f64 / (1024.0 * 1024.0);
                format!("❌ Image is too large ({mib:.2} MiB). The limit is 20 MiB.")
            }
            Self::EmptyOrCorrupt => "❌ The downloaded file is empty or corrupt.".to_string(),
            Self::Timeout => "❌ Download timed out. Try again.".to_string(),
            Self::Network { detail } => format!("❌ Error downloading image: {detail}"),
            Self::SendFailure { .. } | Self::Unexpected { .. } => {
                "❌ An unexpected error occurred.".to_string()
            }
        }
    }
}

impl From<FetchError> for RelayError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::TooLarge { size_bytes } => Self::Oversize { size_bytes },
            FetchError::WrongContentType { declared } => Self::WrongContentType { declared },
            FetchError::Timeout => Self::Timeout,
            FetchError::Network { detail } => Self::Network { detail },
            FetchError::EmptyOrCorrupt => Self::EmptyOrCorrupt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_a_distinct_style_of_message() {
        let oversize = RelayError::Oversize {
            size_bytes: 21 * 1024 * 1024,
        };
        assert!(oversize.user_message().contains("21.00 MiB"));

        let wrong = RelayError::WrongContentType {
            declared: "text/html".into(),
        };
        assert!(wrong.user_message().contains("text/html"));

        let unexpected = RelayError::unexpected("edit failed");
        assert_eq!(unexpected.user_message(), "❌ An unexpected error occurred.");
    }

    #[test]
    fn fetch_errors_map_one_to_one() {
        assert!(matches!(
            RelayError::from(FetchError::TooLarge { size_bytes: 1 }),
            RelayError::Oversize { size_bytes: 1 }
        ));
        assert!(matches!(
            RelayError::from(FetchError::Timeout),
            RelayError::Timeout
        ));
        assert!(matches!(
            RelayError::from(FetchError::wrong_type("text/html")),
            RelayError::WrongContentType { .. }
        ));
    }
}
