mod artifact;
mod chat;
mod fetched_image;

pub use artifact::TemporaryArtifact;
pub use chat::{ChatId, MessageId};
pub use fetched_image::FetchedImage;
