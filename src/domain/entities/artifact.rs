//! Scoped temporary file holding downloaded image bytes.

use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::extension::ImageExtension;

/// A filesystem-backed byte buffer owned by exactly one relay operation.
///
/// Created at fetch start and deleted when the operation ends, on every
/// exit path. Dropping the artifact removes the backing file; [`discard`]
/// does the same but logs deletion failures instead of swallowing them.
///
/// [`discard`]: TemporaryArtifact::discard
#[derive(Debug)]
pub struct TemporaryArtifact {
    file: NamedTempFile,
    size_bytes: u64,
    extension: ImageExtension,
}

impl TemporaryArtifact {
    /// Wraps an already-written temporary file.
    #[must_use]
    pub fn new(file: NamedTempFile, size_bytes: u64, extension: ImageExtension) -> Self {
        Self {
            file,
            size_bytes,
            extension,
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Number of bytes written to the file.
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Extension the file was created with.
    #[must_use]
    pub const fn extension(&self) -> ImageExtension {
        self.extension
    }

    /// Deletes the backing file, logging any failure.
    ///
    /// Deletion errors are never surfaced to the user and never retried.
    pub fn discard(self) {
        let path = self.file.path().to_path_buf();
        match self.file.close() {
            Ok(()) => debug!(path = %path.display(), "Deleted temp file"),
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to delete temp file"),
        }
    }
}
