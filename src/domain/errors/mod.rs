mod fetch_error;
mod relay_error;

pub use fetch_error::FetchError;
pub use relay_error::RelayError;
