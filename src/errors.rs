//! Error types for the page conversion pipeline.
//!
//! Structural problems abort the conversion of a single page; per-image
//! fetch failures are collected and reported alongside a successful
//! conversion instead of failing it.

use std::path::PathBuf;

/// Required page structure was not found in the parsed document.
///
/// Fatal for the page being converted, harmless for any other page in a
/// batch run.
#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    #[error("page title not found (selector `{0}`)")]
    TitleMissing(&'static str),

    #[error("page title is empty after trimming")]
    TitleEmpty,

    #[error("content region not found (selector `{0}`)")]
    ContentMissing(&'static str),
}

/// A single image could not be resolved or fetched.
///
/// Collected per conversion and reported to the caller; the reference in
/// the output markdown is left pointing at the original URL.
#[derive(Debug, Clone, serde::Serialize, thiserror::Error)]
#[error("failed to fetch image {url}: {reason}")]
pub struct AssetFetchError {
    pub url: String,
    pub reason: String,
}

impl AssetFetchError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Top-level failure of a single page conversion or write.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("invalid CSS selector `{0}`")]
    Selector(&'static str),

    #[error("invalid origin URL `{origin}`: {reason}")]
    Origin { origin: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("markdown conversion failed: {0}")]
    Markdown(#[source] std::io::Error),

    #[error("document serialization failed: {0}")]
    Serialize(String),

    #[error("filesystem operation failed at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
