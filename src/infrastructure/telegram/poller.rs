//! Long-poll loop dispatching updates to the relay pipeline.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::TelegramClient;
use crate::application::RelayUseCase;
use crate::domain::entities::ChatId;
use crate::domain::ports::MessengerPort;

const POLL_RETRY_DELAY: Duration = Duration::from_secs(3);

const WELCOME_TEXT: &str =
    "👋 Hi! Send me an image URL, and I'll download and send it back as a photo.";

const HELP_TEXT: &str = "🤖 Image Download Bot

How to use:
1️⃣ Send me a direct image URL
2️⃣ I'll download it
3️⃣ I'll send it back to you

Supported formats: JPG, PNG, GIF, BMP, WEBP.

Example URLs:
https://example.com/image.jpg
https://example.com/photo.png";

/// Recognized command verbs; these bypass the relay pipeline entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Help,
}

/// Matches `/start` and `/help`, including the `/cmd@botname` group form.
fn parse_command(text: &str) -> Option<Command> {
    let verb = text.trim().split_whitespace().next()?;
    let verb = verb.split('@').next().unwrap_or(verb);
    match verb {
        "/start" => Some(Command::Start),
        "/help" => Some(Command::Help),
        _ => None,
    }
}

/// Polls the Bot API for updates and hands each text message to the relay
/// use case. Each relay operation runs in its own task with no shared
/// mutable state; the poll loop itself never dies on transport errors.
pub struct UpdatePoller {
    client: Arc<TelegramClient>,
    relay: RelayUseCase,
}

impl UpdatePoller {
    /// Creates a poller over the given client and relay use case.
    #[must_use]
    pub fn new(client: Arc<TelegramClient>, relay: RelayUseCase) -> Self {
        Self { client, relay }
    }

    /// Runs the long-poll loop until the process is stopped.
    pub async fn run(&self) {
        info!("Bot is starting...");
        let mut offset = 0i64;

        loop {
            match self.client.get_updates(offset).await {
                Ok(updates) => {
                    for update in updates {
                        offset = offset.max(update.update_id + 1);
                        let Some(message) = update.message else {
                            continue;
                        };
                        let Some(text) = message.text else {
                            debug!(chat = message.chat.id, "Ignoring non-text message");
                            continue;
                        };
                        self.dispatch(ChatId(message.chat.id), text);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Update poll failed, retrying");
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                }
            }
        }
    }

    fn dispatch(&self, chat: ChatId, text: String) {
        match parse_command(&text) {
            Some(Command::Start) => self.reply_static(chat, WELCOME_TEXT),
            Some(Command::Help) => self.reply_static(chat, HELP_TEXT),
            None => {
                let relay = self.relay.clone();
                tokio::spawn(async move {
                    relay.execute(chat, &text).await;
                });
            }
        }
    }

    fn reply_static(&self, chat: ChatId, text: &'static str) {
        let client = self.client.clone();
        tokio::spawn(async move {
            if let Err(e) = client.send_text(chat, text).await {
                error!(chat = %chat, error = %e, "Failed to send command reply");
            }
        });
    }
}
