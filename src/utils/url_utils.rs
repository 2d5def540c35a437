//! URL helpers for image discovery and fetching.

use url::Url;

/// Resolve an image `src` attribute to an absolute URL.
///
/// Absolute URLs parse as-is; relative references are joined against the
/// page origin.
///
/// # Errors
///
/// Returns the parse error when the `src` is neither a valid absolute URL
/// nor joinable against the origin.
pub fn resolve_against_origin(src: &str, origin: &Url) -> Result<Url, url::ParseError> {
    match Url::parse(src) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => origin.join(src),
        Err(e) => Err(e),
    }
}

/// Check whether a URL points at something we can fetch over HTTP.
#[must_use]
pub fn is_fetchable_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
        }
        Err(_) => false,
    }
}
