//! Browser-like request headers for image downloads.
//!
//! Some image hosts reject obviously non-browser clients, so requests
//! advertise a full browser header set with a Referer derived from the
//! target itself.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use url::Url;

/// Browser user agent advertised on every download request.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const ACCEPT_IMAGES: &str = "image/avif,image/webp,image/apng,image/*,*/*;q=0.8";
const ACCEPT_LANG: &str = "en-US,en;q=0.9";

/// Builds the header set for a download of `target`.
///
/// The Referer and Sec-Fetch-Site values are derived from the target's
/// scheme and host so the request looks like an in-page image load.
#[must_use]
pub fn browser_headers(target: &Url) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_IMAGES));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANG));

    if let Some(host) = target.host_str() {
        let referer = format!("{}://{host}/", target.scheme());
        if let Ok(value) = HeaderValue::from_str(&referer) {
            headers.insert(REFERER, value);
        }
    }

    headers.insert("Sec-Fetch-Dest", HeaderValue::from_static("image"));
    headers.insert("Sec-Fetch-Mode", HeaderValue::from_static("no-cors"));
    headers.insert("Sec-Fetch-Site", HeaderValue::from_static("same-origin"));

    headers
}
