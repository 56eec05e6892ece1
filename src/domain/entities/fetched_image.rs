//! Successful fetch payload.

use std::path::Path;

use super::TemporaryArtifact;
use crate::domain::extension::ImageExtension;

/// A fully downloaded image, ready to forward as a photo attachment.
#[derive(Debug)]
pub struct FetchedImage {
    artifact: TemporaryArtifact,
}

impl FetchedImage {
    /// Wraps the downloaded artifact.
    #[must_use]
    pub fn new(artifact: TemporaryArtifact) -> Self {
        Self { artifact }
    }

    /// Path of the downloaded bytes on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.artifact.path()
    }

    /// Downloaded size in bytes.
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.artifact.size_bytes()
    }

    /// Downloaded size in MiB, for user-facing captions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_mib(&self) -> f64 {
        self.artifact.size_bytes() as f64 / (1024.0 * 1024.0)
    }

    /// Resolved file extension.
    #[must_use]
    pub const fn extension(&self) -> ImageExtension {
        self.artifact.extension()
    }

    /// Consumes the image, deleting the backing file.
    pub fn discard(self) {
        self.artifact.discard();
    }
}
