mod fetcher_port;
mod messenger_port;

pub use fetcher_port::ImageFetcherPort;
pub use messenger_port::{MessengerError, MessengerPort};

#[cfg(test)]
pub mod mocks {
    pub use super::fetcher_port::mock::MockImageFetcher;
    pub use super::messenger_port::mock::{MessengerCall, MockMessenger};
}
