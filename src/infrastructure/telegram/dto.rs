//! Wire DTOs for the Telegram Bot API.

use serde::Deserialize;

/// Envelope returned by `getUpdates`.
#[derive(Debug, Deserialize)]
pub struct UpdatesResponse {
    /// Whether the API call succeeded.
    pub ok: bool,
    /// Updates received since the requested offset.
    #[serde(default)]
    pub result: Vec<Update>,
}

/// One long-poll update.
#[derive(Debug, Deserialize)]
pub struct Update {
    /// Monotonically increasing update id, used as the next poll offset.
    pub update_id: i64,
    /// The inbound message, if this update carries one.
    pub message: Option<IncomingMessage>,
}

/// An inbound chat message.
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    /// Message id within the chat.
    pub message_id: i64,
    /// Originating chat.
    pub chat: Chat,
    /// Text content; absent for stickers, photos, and other payloads.
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Deserialize)]
pub struct Chat {
    /// Chat id.
    pub id: i64,
}

/// Envelope returned by message-sending methods.
#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    /// Whether the API call succeeded.
    pub ok: bool,
    /// The sent message, when `ok`.
    pub result: Option<SentMessage>,
    /// Error description, when not `ok`.
    pub description: Option<String>,
}

/// Subset of a sent message we need for later edits.
#[derive(Debug, Deserialize)]
pub struct SentMessage {
    /// Message id within the chat.
    pub message_id: i64,
}
