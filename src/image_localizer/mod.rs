//! Downloads every image referenced by the content region and records
//! where each one landed on disk.
//!
//! Fetches run concurrently; naming and writes run serially in discovery
//! order so suffix assignment is deterministic for a given page. A
//! single failed image never aborts the conversion.

pub mod fetch;
pub mod store;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use kuchiki::NodeRef;
use serde::Serialize;
use url::Url;

use crate::config::ConvertConfig;
use crate::errors::{AssetFetchError, ConvertError};
use crate::utils::{is_fetchable_url, resolve_against_origin};

use store::ImageStore;

/// An image reference found in the content region, keyed by its
/// resolved absolute URL.
#[derive(Debug, Clone)]
pub struct DiscoveredImage {
    /// Resolved absolute URL to fetch.
    pub url: Url,
    /// Every distinct `src` string that resolved to `url`, in the order
    /// they appeared.
    pub sources: Vec<String>,
}

/// One image that now lives on disk.
#[derive(Debug, Clone, Serialize)]
pub struct LocalizedImage {
    /// Absolute URL the bytes were fetched from.
    pub url: String,
    /// Every distinct `src` string from the page that resolved to `url`.
    pub sources: Vec<String>,
    /// Where the bytes were written.
    pub path: PathBuf,
}

/// Mapping from original image URLs to local files, in discovery order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AssetMap {
    pub(crate) entries: Vec<LocalizedImage>,
}

impl AssetMap {
    #[must_use]
    pub fn entries(&self) -> &[LocalizedImage] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Local path recorded for an absolute URL, if its fetch succeeded.
    #[must_use]
    pub fn local_path_for(&self, url: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|entry| entry.url == url)
            .map(|entry| entry.path.as_path())
    }
}

/// Fetch every discovered image and write it below the configured image
/// directory.
///
/// Discovery is a separate, synchronous step ([`discover_images`]) so no
/// DOM handle is ever held across an await; this future stays `Send`.
///
/// Returns the asset map for the images that made it to disk together
/// with the failures for those that did not. Fetch problems land in the
/// failure list; filesystem problems are fatal.
///
/// # Errors
///
/// Returns `ConvertError` when the image directory cannot be created,
/// a write fails, or the HTTP client cannot be built.
pub async fn localize_images(
    discovered: Vec<DiscoveredImage>,
    config: &ConvertConfig,
) -> Result<(AssetMap, Vec<AssetFetchError>), ConvertError> {
    let mut failures = Vec::new();
    if discovered.is_empty() {
        return Ok((AssetMap::default(), failures));
    }

    let client = fetch::build_client(config.fetch_timeout())?;
    let results = fetch::fetch_all(&client, &discovered).await;

    tokio::fs::create_dir_all(config.image_dir())
        .await
        .map_err(|e| ConvertError::filesystem(config.image_dir(), e))?;

    let mut image_store = ImageStore::new(config.image_dir().to_path_buf(), config.overwrite());
    let mut entries = Vec::new();

    for (image, result) in discovered.into_iter().zip(results) {
        match result {
            Ok(bytes) => {
                let path = image_store.store(&image.url, &bytes).await?;
                entries.push(LocalizedImage {
                    url: image.url.to_string(),
                    sources: image.sources,
                    path,
                });
            }
            Err(failure) => failures.push(failure),
        }
    }

    log::info!(
        "localized {} images under {} ({} failed)",
        entries.len(),
        config.image_dir().display(),
        failures.len()
    );

    Ok((AssetMap { entries }, failures))
}

/// Collect the distinct fetchable image URLs under `content`.
///
/// Dedup is by resolved absolute URL, not by element, so repeated
/// references fetch once. Unresolvable `src` values are recorded as
/// failures; non-HTTP references (`data:` and friends) need no
/// localization and are skipped.
pub fn discover_images(
    content: &NodeRef,
    origin: &Url,
) -> Result<(Vec<DiscoveredImage>, Vec<AssetFetchError>), ConvertError> {
    let mut discovered: Vec<DiscoveredImage> = Vec::new();
    let mut index_by_url: HashMap<String, usize> = HashMap::new();
    let mut failures = Vec::new();

    for img in content
        .select("img")
        .map_err(|()| ConvertError::Selector("img"))?
    {
        let src = {
            let attributes = img.attributes.borrow();
            attributes.get("src").map(String::from)
        };
        let Some(src) = src else {
            continue;
        };
        if src.is_empty() {
            continue;
        }

        match resolve_against_origin(&src, origin) {
            Ok(resolved) => {
                if !is_fetchable_url(resolved.as_str()) {
                    log::debug!("skipping non-fetchable image reference: {src}");
                    continue;
                }
                match index_by_url.get(resolved.as_str()) {
                    Some(&index) => {
                        let entry = &mut discovered[index];
                        if !entry.sources.contains(&src) {
                            entry.sources.push(src);
                        }
                    }
                    None => {
                        index_by_url.insert(resolved.as_str().to_string(), discovered.len());
                        discovered.push(DiscoveredImage {
                            url: resolved,
                            sources: vec![src],
                        });
                    }
                }
            }
            Err(e) => {
                log::warn!("could not resolve image src {src:?} against {origin}: {e}");
                failures.push(AssetFetchError::new(
                    src,
                    format!("could not resolve against {origin}: {e}"),
                ));
            }
        }
    }

    Ok((discovered, failures))
}
