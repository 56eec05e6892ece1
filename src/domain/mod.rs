//! Domain layer with the pure relay logic, entities, and port definitions.

/// URL classification.
pub mod classifier;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// File extension resolution.
pub mod extension;
/// Port definitions.
pub mod ports;

pub use classifier::MatchMode;
pub use entities::{ChatId, FetchedImage, MessageId, TemporaryArtifact};
pub use errors::{FetchError, RelayError};
pub use extension::ImageExtension;
pub use ports::{ImageFetcherPort, MessengerPort};

/// Maximum accepted downloaded byte count, matching Telegram's photo limit.
pub const SIZE_CEILING_BYTES: u64 = 20 * 1024 * 1024;

/// Connection and read timeout for image downloads, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 30;
