//! Shared configuration constants for docport
//!
//! Default values used throughout the conversion pipeline to ensure
//! consistency and avoid magic numbers.

/// Default per-request timeout for image fetches: 30 seconds
///
/// Long enough for large diagrams on slow CDNs, short enough that a dead
/// host fails one image instead of stalling the whole conversion.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default name of the image directory under the content root
pub const DEFAULT_IMAGE_DIR: &str = "images";

/// Extension appended to emitted content files when none is given
pub const PAGE_FILE_EXTENSION: &str = ".md";

/// Chrome user agent string for image fetches
///
/// Documentation platforms front their upload CDNs with bot filters that
/// reject blank or obviously programmatic agents.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
