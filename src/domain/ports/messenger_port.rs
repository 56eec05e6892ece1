//! Port definition for the outbound messaging transport.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::entities::{ChatId, MessageId};

/// Errors raised by the messaging transport.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MessengerError {
    /// The transport API rejected the request.
    #[error("API error: {0}")]
    Api(String),
    /// The request never reached the transport.
    #[error("network error: {0}")]
    Network(String),
    /// Local I/O failed while preparing the payload.
    #[error("IO error: {0}")]
    Io(String),
}

/// Port for sending, editing, and deleting messages on the hosting
/// messaging transport. Implementations must be thread-safe.
#[async_trait]
pub trait MessengerPort: Send + Sync {
    /// Sends a text message and returns its id for later edits.
    ///
    /// # Errors
    /// Returns error if the transport rejects or never receives the message.
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<MessageId, MessengerError>;

    /// Edits a previously sent text message in place.
    ///
    /// # Errors
    /// Returns error if the edit fails.
    async fn edit_text(
        &self,
        chat: ChatId,
        message: MessageId,
        text: &str,
    ) -> Result<(), MessengerError>;

    /// Deletes a previously sent message.
    ///
    /// # Errors
    /// Returns error if the deletion fails.
    async fn delete_message(&self, chat: ChatId, message: MessageId) -> Result<(), MessengerError>;

    /// Sends the file at `path` as a photo attachment.
    ///
    /// # Errors
    /// Returns error if reading the file or uploading it fails.
    async fn send_photo(
        &self,
        chat: ChatId,
        path: &Path,
        caption: Option<&str>,
    ) -> Result<(), MessengerError>;
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    use super::*;

    /// One recorded transport interaction.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum MessengerCall {
        SendText(ChatId, String),
        EditText(ChatId, MessageId, String),
        Delete(ChatId, MessageId),
        SendPhoto(ChatId, PathBuf, Option<String>),
    }

    /// Records every call; individual operations can be made to fail.
    #[derive(Default)]
    pub struct MockMessenger {
        pub calls: Mutex<Vec<MessengerCall>>,
        next_id: AtomicI64,
        pub fail_send_photo: bool,
        pub fail_edits: bool,
    }

    impl MockMessenger {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_photo_sends() -> Self {
            Self {
                fail_send_photo: true,
                ..Self::default()
            }
        }

        pub fn recorded(&self) -> Vec<MessengerCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessengerPort for MockMessenger {
        async fn send_text(&self, chat: ChatId, text: &str) -> Result<MessageId, MessengerError> {
            let id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            self.calls
                .lock()
                .unwrap()
                .push(MessengerCall::SendText(chat, text.to_string()));
            Ok(id)
        }

        async fn edit_text(
            &self,
            chat: ChatId,
            message: MessageId,
            text: &str,
        ) -> Result<(), MessengerError> {
            self.calls
                .lock()
                .unwrap()
                .push(MessengerCall::EditText(chat, message, text.to_string()));
            if self.fail_edits {
                return Err(MessengerError::Api("edit rejected".into()));
            }
            Ok(())
        }

        async fn delete_message(
            &self,
            chat: ChatId,
            message: MessageId,
        ) -> Result<(), MessengerError> {
            self.calls
                .lock()
                .unwrap()
                .push(MessengerCall::Delete(chat, message));
            Ok(())
        }

        async fn send_photo(
            &self,
            chat: ChatId,
            path: &Path,
            caption: Option<&str>,
        ) -> Result<(), MessengerError> {
            self.calls.lock().unwrap().push(MessengerCall::SendPhoto(
                chat,
                path.to_path_buf(),
                caption.map(String::from),
            ));
            if self.fail_send_photo {
                return Err(MessengerError::Api("upload rejected".into()));
            }
            Ok(())
        }
    }
}
