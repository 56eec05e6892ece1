//! File extension resolution for downloaded images.

/// A recognized image file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageExtension {
    /// `.jpg` - also the fallback when nothing else matches.
    #[default]
    Jpg,
    /// `.jpeg`
    Jpeg,
    /// `.png`
    Png,
    /// `.gif`
    Gif,
    /// `.bmp`
    Bmp,
    /// `.webp`
    Webp,
}

impl ImageExtension {
    /// Returns the file suffix including the leading dot.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Jpg => ".jpg",
            Self::Jpeg => ".jpeg",
            Self::Png => ".png",
            Self::Gif => ".gif",
            Self::Bmp => ".bmp",
            Self::Webp => ".webp",
        }
    }

    /// Derives a file extension from the URL path or declared content type.
    ///
    /// The URL path suffix wins; otherwise the content type is mapped by
    /// substring; otherwise falls back to `.jpg`. Total function, no I/O.
    #[must_use]
    pub fn resolve(url: &str, content_type: Option<&str>) -> Self {
        if let Some(ext) = Self::from_path_suffix(url) {
            return ext;
        }
        if let Some(declared) = content_type {
            if let Some(ext) = Self::from_content_type(declared) {
                return ext;
            }
        }
        Self::Jpg
    }

    fn from_path_suffix(url: &str) -> Option<Self> {
        let path = url
            .split(['?', '#'])
            .next()
            .unwrap_or(url)
            .to_ascii_lowercase();

        if path.ends_with(".jpeg") {
            Some(Self::Jpeg)
        } else if path.ends_with(".jpg") {
            Some(Self::Jpg)
        } else if path.ends_with(".png") {
            Some(Self::Png)
        } else if path.ends_with(".gif") {
            Some(Self::Gif)
        } else if path.ends_with(".bmp") {
            Some(Self::Bmp)
        } else if path.ends_with(".webp") {
            Some(Self::Webp)
        } else {
            None
        }
    }

    fn from_content_type(declared: &str) -> Option<Self> {
        let declared = declared.to_ascii_lowercase();
        if declared.contains("jpeg") || declared.contains("jpg") {
            Some(Self::Jpg)
        } else if declared.contains("png") {
            Some(Self::Png)
        } else if declared.contains("gif") {
            Some(Self::Gif)
        } else if declared.contains("bmp") {
            Some(Self::Bmp)
        } else if declared.contains("webp") {
            Some(Self::Webp)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("https://a.com/x.jpg", ImageExtension::Jpg)]
    #[test_case("https://a.com/x.jpeg", ImageExtension::Jpeg)]
    #[test_case("https://a.com/x.PNG", ImageExtension::Png)]
    #[test_case("https://a.com/x.gif", ImageExtension::Gif)]
    #[test_case("https://a.com/x.bmp", ImageExtension::Bmp)]
    #[test_case("https://a.com/x.webp", ImageExtension::Webp)]
    fn resolves_from_url_path(url: &str, expected: ImageExtension) {
        assert_eq!(ImageExtension::resolve(url, None), expected);
    }

    #[test]
    fn url_path_wins_over_content_type() {
        assert_eq!(
            ImageExtension::resolve("https://a.com/x.png", Some("image/gif")),
            ImageExtension::Png
        );
    }

    #[test]
    fn query_string_is_stripped() {
        assert_eq!(
            ImageExtension::resolve("https://a.com/x.webp?width=640", None),
            ImageExtension::Webp
        );
    }

    #[test_case("image/jpeg", ImageExtension::Jpg)]
    #[test_case("image/jpg", ImageExtension::Jpg)]
    #[test_case("image/png; charset=binary", ImageExtension::Png)]
    #[test_case("image/gif", ImageExtension::Gif)]
    #[test_case("image/bmp", ImageExtension::Bmp)]
    #[test_case("image/webp", ImageExtension::Webp)]
    fn resolves_from_content_type(declared: &str, expected: ImageExtension) {
        assert_eq!(
            ImageExtension::resolve("https://a.com/download", Some(declared)),
            expected
        );
    }

    #[test]
    fn defaults_to_jpg_when_nothing_matches() {
        assert_eq!(
            ImageExtension::resolve("https://a.com/download", Some("application/octet-stream")),
            ImageExtension::Jpg
        );
        assert_eq!(
            ImageExtension::resolve("https://a.com/download", None),
            ImageExtension::Jpg
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let url = "https://a.com/picture";
        assert_eq!(
            ImageExtension::resolve(url, Some("image/webp")),
            ImageExtension::resolve(url, Some("image/webp"))
        );
    }
}
