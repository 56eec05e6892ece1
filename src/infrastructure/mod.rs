//! Infrastructure layer: adapters for HTTP downloads, the Telegram Bot API,
//! and application configuration.

/// Configuration loading and CLI arguments.
pub mod config;
/// Streaming image download over HTTP.
pub mod http;
/// Telegram Bot API client and update polling.
pub mod telegram;

pub use config::{AppConfig, CliArgs, LogLevel};
pub use http::StreamingFetcher;
pub use telegram::{TelegramClient, UpdatePoller};
