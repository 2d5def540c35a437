//! Type-safe builder for `ConvertConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time
//! validation ensuring that the page origin is set before building a
//! `ConvertConfig`.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;
use url::Url;

use super::types::ConvertConfig;
use crate::utils::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_IMAGE_DIR};

// Type states for the builder
pub struct WithOrigin;

pub struct ConvertConfigBuilder<State = ()> {
    pub(crate) origin: Option<String>,
    pub(crate) content_root: PathBuf,
    pub(crate) image_dir: Option<PathBuf>,
    pub(crate) overwrite: bool,
    pub(crate) file_name: Option<String>,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ConvertConfigBuilder<()> {
    fn default() -> Self {
        Self {
            origin: None,
            content_root: PathBuf::from("."),
            image_dir: None,
            overwrite: false,
            file_name: None,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            _phantom: PhantomData,
        }
    }
}

impl ConvertConfig {
    /// Create a builder for configuring a `ConvertConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ConvertConfigBuilder<()> {
        ConvertConfigBuilder::default()
    }
}

impl ConvertConfigBuilder<()> {
    pub fn origin(self, origin: impl Into<String>) -> ConvertConfigBuilder<WithOrigin> {
        let origin_string = origin.into();

        // Normalize origin: add https:// if no scheme is present
        let normalized_origin = if origin_string.starts_with("http://")
            || origin_string.starts_with("https://")
        {
            origin_string
        } else {
            format!("https://{origin_string}")
        };

        ConvertConfigBuilder {
            origin: Some(normalized_origin),
            content_root: self.content_root,
            image_dir: self.image_dir,
            overwrite: self.overwrite,
            file_name: self.file_name,
            fetch_timeout_secs: self.fetch_timeout_secs,
            _phantom: PhantomData,
        }
    }
}

// Build method only available once the origin is set
impl ConvertConfigBuilder<WithOrigin> {
    pub fn build(self) -> Result<ConvertConfig> {
        let origin = self.origin.ok_or_else(|| anyhow!("origin is required"))?;

        let parsed = Url::parse(&origin).map_err(|e| anyhow!("Invalid origin '{origin}': {e}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!(
                "Invalid origin '{origin}': scheme must be http or https"
            ));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(anyhow!("fetch_timeout_secs must be greater than zero"));
        }

        let image_dir = self
            .image_dir
            .unwrap_or_else(|| self.content_root.join(DEFAULT_IMAGE_DIR));

        if image_dir.strip_prefix(&self.content_root).is_err() {
            tracing::warn!(
                "Image directory {} is outside the content root {}; rewritten image \
                 references will use relative paths",
                image_dir.display(),
                self.content_root.display()
            );
        }

        Ok(ConvertConfig {
            origin,
            content_root: self.content_root,
            image_dir,
            overwrite: self.overwrite,
            file_name: self.file_name,
            fetch_timeout_secs: self.fetch_timeout_secs,
        })
    }
}
