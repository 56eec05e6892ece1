//! URL classification for candidate image links.

use url::Url;

/// Extensions accepted as direct image links.
pub const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"];

/// Path substrings that hint at an image in lenient mode.
const IMAGE_PATH_HINTS: [&str; 4] = ["image", "img", "photo", "pic"];

/// How aggressively to match candidate URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Accept only URLs whose path ends with a recognized image extension.
    #[default]
    Strict,
    /// Additionally accept URLs with image-like path substrings or a
    /// recognized extension anywhere in the URL. Higher false-positive rate.
    Lenient,
}

/// Why a candidate string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not an http(s) URL with a host at all.
    NotAUrl,
    /// A valid URL, but nothing suggests it points at an image.
    NotImageLike,
}

/// Decides whether a string is an acceptable image URL.
///
/// Pure function: no I/O, no side effects.
///
/// # Errors
/// Returns the rejection reason when the candidate is not accepted.
pub fn classify(text: &str, mode: MatchMode) -> Result<(), Rejection> {
    let parsed = Url::parse(text).map_err(|_| Rejection::NotAUrl)?;

    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return Err(Rejection::NotAUrl);
    }

    let path = parsed.path().to_ascii_lowercase();
    if IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return Ok(());
    }

    if mode == MatchMode::Lenient {
        if IMAGE_PATH_HINTS.iter().any(|hint| path.contains(hint)) {
            return Ok(());
        }
        let whole = text.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.iter().any(|ext| whole.contains(ext)) {
            return Ok(());
        }
    }

    Err(Rejection::NotImageLike)
}
