//! HTTP download adapters.

mod fetcher;
mod headers;

pub use fetcher::StreamingFetcher;
pub use headers::browser_headers;
