//! Core configuration type for page conversion
//!
//! This module contains the `ConvertConfig` struct that defines where a
//! converted page and its images land and how conflicts are handled.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::DEFAULT_FETCH_TIMEOUT_SECS;

/// Configuration for a single page conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Origin the page was served from.
    ///
    /// **INVARIANT:** Always an absolute `http(s)` URL (normalized and
    /// validated in the builder). Relative image `src` attributes are
    /// resolved against it.
    pub(crate) origin: String,

    /// Directory the content file is written under.
    pub(crate) content_root: PathBuf,

    /// Directory downloaded images are written under.
    ///
    /// Rewritten image references are expressed relative to
    /// `content_root`, so keeping this nested under the content root
    /// produces site-absolute `/images/...` references.
    pub(crate) image_dir: PathBuf,

    /// Replace existing files instead of skipping them.
    pub(crate) overwrite: bool,

    /// Explicit output filename; derived from the title when `None`.
    pub(crate) file_name: Option<String>,

    /// Per-request timeout for image fetches, in seconds.
    ///
    /// A timed-out fetch fails that one image, never the conversion.
    #[serde(default = "default_fetch_timeout")]
    pub(crate) fetch_timeout_secs: u64,
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}
