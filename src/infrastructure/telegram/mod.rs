//! Telegram Bot API adapters.

mod client;
mod dto;
mod poller;

pub use client::TelegramClient;
pub use dto::{Chat, IncomingMessage, Update};
pub use poller::UpdatePoller;
