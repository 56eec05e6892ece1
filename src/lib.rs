//! Picrelay - a Telegram image relay bot.
//!
//! This crate downloads remote images identified by a URL under size and
//! content-type constraints and forwards them back to the chat as photo
//! attachments, editing a single status message in place along the way.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the relay use case and status handle.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "picrelay";
