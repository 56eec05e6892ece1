//! Port definition for streaming image downloads.

use async_trait::async_trait;

use crate::domain::entities::FetchedImage;
use crate::domain::errors::FetchError;

/// Port for downloading a remote image into a temporary artifact.
/// Implementations must be thread-safe.
#[async_trait]
pub trait ImageFetcherPort: Send + Sync {
    /// Downloads the image at `url`, enforcing size and content-type limits
    /// while streaming.
    ///
    /// # Errors
    /// Returns a [`FetchError`] describing the failure; no partial artifact
    /// is retained on any error path.
    async fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError>;
}
