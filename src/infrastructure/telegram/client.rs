//! Telegram Bot API HTTP client.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use super::dto::{SendMessageResponse, Update, UpdatesResponse};
use crate::domain::entities::{ChatId, MessageId};
use crate::domain::ports::{MessengerError, MessengerPort};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// How long a `getUpdates` long poll may hang before the server responds.
pub const POLL_TIMEOUT_SECS: u64 = 30;

/// Telegram Bot API adapter implementing [`MessengerPort`].
pub struct TelegramClient {
    client: Client,
    api_base: String,
    token: String,
}

impl TelegramClient {
    /// Creates a client against the public Bot API.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(token: impl Into<String>) -> Result<Self, MessengerError> {
        Self::with_api_base(token, TELEGRAM_API_BASE)
    }

    /// Creates a client with a custom API base URL.
    /// Useful for local Bot API servers or testing.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_api_base(
        token: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self, MessengerError> {
        // Long polls hold the connection open for POLL_TIMEOUT_SECS, so the
        // client timeout must sit above that.
        let client = Client::builder()
            .timeout(Duration::from_secs(POLL_TIMEOUT_SECS + 10))
            .build()
            .map_err(|e| MessengerError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            token: token.into(),
        })
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_base, self.token)
    }

    /// Long-polls for updates past `offset`.
    ///
    /// # Errors
    /// Returns error if the poll request or its decoding fails.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, MessengerError> {
        let body = json!({
            "offset": offset,
            "timeout": POLL_TIMEOUT_SECS,
            "allowed_updates": ["message"],
        });

        let response = self
            .client
            .post(self.api_url("getUpdates"))
            .json(&body)
            .send()
            .await
            .map_err(|e| MessengerError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MessengerError::Api(format!(
                "getUpdates failed: HTTP {}",
                response.status()
            )));
        }

        let parsed: UpdatesResponse = response
            .json()
            .await
            .map_err(|e| MessengerError::Api(format!("malformed getUpdates response: {e}")))?;

        if !parsed.ok {
            return Err(MessengerError::Api("getUpdates returned ok=false".into()));
        }

        Ok(parsed.result)
    }

    async fn post_json(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, MessengerError> {
        let response = self
            .client
            .post(self.api_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| MessengerError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(MessengerError::Api(format!(
                "{method} failed: HTTP {status} {detail}"
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl MessengerPort for TelegramClient {
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<MessageId, MessengerError> {
        let body = json!({ "chat_id": chat.0, "text": text });
        let response = self.post_json("sendMessage", &body).await?;

        let parsed: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| MessengerError::Api(format!("malformed sendMessage response: {e}")))?;

        let sent = parsed.result.ok_or_else(|| {
            MessengerError::Api(
                parsed
                    .description
                    .unwrap_or_else(|| "sendMessage returned no message".into()),
            )
        })?;

        debug!(chat = %chat, message_id = sent.message_id, "Sent message");
        Ok(MessageId(sent.message_id))
    }

    async fn edit_text(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
    ) -> Result<(), MessengerError> {
        let body = json!({ "chat_id": chat.0, "message_id": message.0, "text": text });
        self.post_json("editMessageText", &body).await?;
        Ok(())
    }

    async fn delete_message(&self, chat: ChatId, message: MessageId) -> Result<(), MessengerError> {
        let body = json!({ "chat_id": chat.0, "message_id": message.0 });
        self.post_json("deleteMessage", &body).await?;
        Ok(())
    }

    async fn send_photo(
        &self,
        chat: ChatId,
        path: &Path,
        caption: Option<&str>,
    ) -> Result<(), MessengerError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo.jpg")
            .to_string();

        let file_bytes = tokio::fs::read(path)
            .await
            .map_err(|e| MessengerError::Io(format!("failed to read {}: {e}", path.display())))?;

        let part = Part::bytes(file_bytes).file_name(file_name.clone());
        let mut form = Form::new()
            .text("chat_id", chat.0.to_string())
            .part("photo", part);

        if let Some(caption) = caption {
            form = form.text("caption", caption.to_string());
        }

        let response = self
            .client
            .post(self.api_url("sendPhoto"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MessengerError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(MessengerError::Api(format!(
                "sendPhoto failed: HTTP {status} {detail}"
            )));
        }

        debug!(chat = %chat, file = %file_name, "Sent photo");
        Ok(())
    }
}
