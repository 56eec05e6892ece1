//! Relay orchestrator: classify, fetch, forward, cleanup.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::StatusNotification;
use crate::domain::classifier::{self, MatchMode, Rejection};
use crate::domain::entities::ChatId;
use crate::domain::errors::RelayError;
use crate::domain::ports::{ImageFetcherPort, MessengerPort};

const STATUS_DOWNLOADING: &str = "⏳ Downloading image...";
const STATUS_SENDING: &str = "📤 Sending image...";

/// Per-orchestrator settings, passed in at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaySettings {
    /// URL matching strictness.
    pub match_mode: MatchMode,
}

/// Sequences one relay operation per inbound message.
///
/// Each operation is strictly sequential and owns all of its state; nothing
/// is shared across concurrent operations. Every failure is terminal for the
/// request: there is no retry.
#[derive(Clone)]
pub struct RelayUseCase {
    fetcher: Arc<dyn ImageFetcherPort>,
    messenger: Arc<dyn MessengerPort>,
    settings: RelaySettings,
}

impl RelayUseCase {
    /// Creates a new relay use case.
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn ImageFetcherPort>,
        messenger: Arc<dyn MessengerPort>,
        settings: RelaySettings,
    ) -> Self {
        Self {
            fetcher,
            messenger,
            settings,
        }
    }

    /// Handles one inbound text message end to end.
    ///
    /// Every error is converted to a user-facing notification here; nothing
    /// propagates to the caller and nothing survives the operation - the
    /// temporary artifact is deleted on every path that created one.
    pub async fn execute(&self, chat: ChatId, text: &str) {
        let url = text.trim();

        if let Err(rejection) = classifier::classify(url, self.settings.match_mode) {
            let err = match rejection {
                Rejection::NotAUrl => RelayError::InvalidUrlFormat,
                Rejection::NotImageLike => RelayError::NotImageLike,
            };
            debug!(chat = %chat, ?rejection, "Rejected candidate URL");
            self.reply(chat, &err.user_message()).await;
            return;
        }

        let status = match StatusNotification::create(
            self.messenger.clone(),
            chat,
            STATUS_DOWNLOADING,
        )
        .await
        {
            Ok(status) => status,
            Err(e) => {
                error!(chat = %chat, error = %e, "Failed to send status message");
                return;
            }
        };

        debug!(chat = %chat, url = %url, "Fetching image");

        let image = match self.fetcher.fetch(url).await {
            Ok(image) => image,
            Err(e) => {
                let err = RelayError::from(e);
                warn!(chat = %chat, url = %url, error = %err, "Fetch failed");
                self.finish_with_error(status, &err).await;
                return;
            }
        };

        if let Err(e) = status.update(STATUS_SENDING).await {
            warn!(chat = %chat, error = %e, "Failed to update status message");
        }

        let caption = format!("📷 {:.2} MiB", image.size_mib());
        let sent = self
            .messenger
            .send_photo(chat, image.path(), Some(&caption))
            .await;

        match sent {
            Ok(()) => {
                info!(chat = %chat, size = image.size_bytes(), "Relayed image");
                status.delete().await;
            }
            Err(e) => {
                let err = RelayError::send_failure(e.to_string());
                error!(chat = %chat, error = %e, "Photo send failed");
                self.finish_with_error(status, &err).await;
            }
        }

        image.discard();
    }

    /// Turns the status message into the final error text.
    ///
    /// The edited status message IS the error notification; it is kept, not
    /// deleted. Edit failures on this path are logged only - there is no
    /// user-facing slot left to report them in.
    async fn finish_with_error(&self, status: StatusNotification, err: &RelayError) {
        if let Err(e) = status.update(&err.user_message()).await {
            error!(error = %e, "Failed to edit status message into error notification");
        }
    }

    async fn reply(&self, chat: ChatId, text: &str) {
        if let Err(e) = self.messenger.send_text(chat, text).await {
            error!(chat = %chat, error = %e, "Failed to send reply");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FetchError;
    use crate::domain::extension::ImageExtension;
    use crate::domain::ports::mocks::{MessengerCall, MockImageFetcher, MockMessenger};

    fn make_use_case(
        fetcher: MockImageFetcher,
        messenger: MockMessenger,
    ) -> (RelayUseCase, Arc<MockImageFetcher>, Arc<MockMessenger>) {
        let fetcher = Arc::new(fetcher);
        let messenger = Arc::new(messenger);
        let use_case = RelayUseCase::new(
            fetcher.clone(),
            messenger.clone(),
            RelaySettings::default(),
        );
        (use_case, fetcher, messenger)
    }

    #[tokio::test]
    async fn rejects_non_url_without_fetching() {
        let (use_case, fetcher, messenger) =
            make_use_case(MockImageFetcher::new(), MockMessenger::new());

        use_case.execute(ChatId(7), "not a url").await;

        assert_eq!(fetcher.call_count(), 0);
        let calls = messenger.recorded();
        assert_eq!(calls.len(), 1);
        assert!(matches!(
            &calls[0],
            MessengerCall::SendText(ChatId(7), text) if text.contains("valid URL")
        ));
    }

    #[tokio::test]
    async fn rejects_non_image_url_with_distinct_message() {
        let (use_case, fetcher, messenger) =
            make_use_case(MockImageFetcher::new(), MockMessenger::new());

        use_case.execute(ChatId(7), "https://example.com/page.html").await;

        assert_eq!(fetcher.call_count(), 0);
        let calls = messenger.recorded();
        assert!(matches!(
            &calls[0],
            MessengerCall::SendText(_, text) if text.contains("direct image URL")
        ));
    }

    #[tokio::test]
    async fn relays_image_and_cleans_up() {
        let fetcher = MockImageFetcher::new();
        fetcher.push_success(&vec![0u8; 500 * 1024], ImageExtension::Png);
        let (use_case, fetcher, messenger) = make_use_case(fetcher, MockMessenger::new());

        use_case
            .execute(ChatId(1), " https://example.com/photo.png ")
            .await;

        assert_eq!(fetcher.call_count(), 1);
        assert_eq!(
            fetcher.calls.lock().unwrap()[0],
            "https://example.com/photo.png"
        );

        let calls = messenger.recorded();
        assert!(matches!(
            &calls[0],
            MessengerCall::SendText(_, text) if text.contains("Downloading")
        ));
        assert!(matches!(
            &calls[1],
            MessengerCall::EditText(_, _, text) if text.contains("Sending")
        ));
        let MessengerCall::SendPhoto(_, path, caption) = &calls[2] else {
            panic!("expected a photo send, got {:?}", calls[2]);
        };
        assert_eq!(caption.as_deref(), Some("📷 0.49 MiB"));
        assert!(matches!(&calls[3], MessengerCall::Delete(_, _)));

        // Artifact lifecycle invariant: nothing left behind after completion.
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn fetch_failure_becomes_status_edit() {
        let fetcher = MockImageFetcher::new();
        fetcher.push_error(FetchError::Timeout);
        let (use_case, _, messenger) = make_use_case(fetcher, MockMessenger::new());

        use_case
            .execute(ChatId(1), "https://example.com/slow.jpg")
            .await;

        let calls = messenger.recorded();
        assert_eq!(calls.len(), 2);
        assert!(matches!(
            &calls[1],
            MessengerCall::EditText(_, _, text) if text.contains("timed out")
        ));
    }

    #[tokio::test]
    async fn oversize_failure_reports_measured_size() {
        let fetcher = MockImageFetcher::new();
        fetcher.push_error(FetchError::TooLarge {
            size_bytes: 21_000_000,
        });
        let (use_case, _, messenger) = make_use_case(fetcher, MockMessenger::new());

        use_case
            .execute(ChatId(1), "https://example.com/huge.jpg")
            .await;

        let calls = messenger.recorded();
        assert!(matches!(
            &calls[1],
            MessengerCall::EditText(_, _, text) if text.contains("too large")
        ));
    }

    #[tokio::test]
    async fn wrong_type_failure_reports_declared_value() {
        let fetcher = MockImageFetcher::new();
        fetcher.push_error(FetchError::wrong_type("text/html"));
        let (use_case, _, messenger) = make_use_case(fetcher, MockMessenger::new());

        use_case
            .execute(ChatId(1), "https://example.com/file.jpg")
            .await;

        let calls = messenger.recorded();
        assert!(matches!(
            &calls[1],
            MessengerCall::EditText(_, _, text) if text.contains("text/html")
        ));
    }

    #[tokio::test]
    async fn send_failure_is_reported_and_artifact_removed() {
        let fetcher = MockImageFetcher::new();
        fetcher.push_success(b"image bytes", ImageExtension::Jpg);
        let (use_case, _, messenger) =
            make_use_case(fetcher, MockMessenger::failing_photo_sends());

        use_case
            .execute(ChatId(1), "https://example.com/photo.jpg")
            .await;

        let calls = messenger.recorded();
        let MessengerCall::SendPhoto(_, path, _) = &calls[2] else {
            panic!("expected a photo send, got {:?}", calls[2]);
        };
        assert!(!path.exists());
        assert!(matches!(
            &calls[3],
            MessengerCall::EditText(_, _, text) if text.contains("unexpected error")
        ));
    }
}
