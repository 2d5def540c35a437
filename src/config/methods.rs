//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use std::path::PathBuf;

use super::builder::ConvertConfigBuilder;

impl<State> ConvertConfigBuilder<State> {
    /// Set the directory the content file is written under.
    #[must_use]
    pub fn content_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_root = dir.into();
        self
    }

    /// Set the directory downloaded images are written under.
    ///
    /// Defaults to `images/` inside the content root. Keeping it nested
    /// under the content root yields site-absolute `/images/...`
    /// references in the rewritten markdown.
    #[must_use]
    pub fn image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Replace existing files instead of skipping them.
    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Use an explicit output filename instead of the title-derived slug.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Set the per-request timeout for image fetches, in seconds.
    #[must_use]
    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }
}
