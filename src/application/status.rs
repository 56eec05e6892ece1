//! The single in-place-edited progress message of a relay operation.

use std::sync::Arc;

use tracing::warn;

use crate::domain::entities::{ChatId, MessageId};
use crate::domain::ports::{MessengerError, MessengerPort};

/// Handle to the one outbound status message of a relay operation.
///
/// Created once, then updated in place through the operation's states
/// rather than re-sent. The original message id is the owning reference
/// for all edits.
pub struct StatusNotification {
    messenger: Arc<dyn MessengerPort>,
    chat: ChatId,
    message: MessageId,
}

impl StatusNotification {
    /// Sends the initial status message and captures its id.
    ///
    /// # Errors
    /// Returns error if the initial send fails.
    pub async fn create(
        messenger: Arc<dyn MessengerPort>,
        chat: ChatId,
        text: &str,
    ) -> Result<Self, MessengerError> {
        let message = messenger.send_text(chat, text).await?;
        Ok(Self {
            messenger,
            chat,
            message,
        })
    }

    /// Replaces the status text in place.
    ///
    /// # Errors
    /// Returns error if the edit fails.
    pub async fn update(&self, text: &str) -> Result<(), MessengerError> {
        self.messenger
            .edit_text(self.chat, self.message, text)
            .await
    }

    /// Deletes the status message. Failures are logged, never surfaced.
    pub async fn delete(self) {
        if let Err(e) = self
            .messenger
            .delete_message(self.chat, self.message)
            .await
        {
            warn!(chat = %self.chat, message = %self.message, error = %e,
                "Failed to delete status message");
        }
    }
}
