//! Local filename assignment and collision-safe image writes.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::io::AsyncWriteExt;
use url::Url;
use xxhash_rust::xxh3::xxh3_64;

use crate::errors::ConvertError;

/// Encoded path separator inside the platform's upload URLs.
const ENCODED_SEPARATOR: &str = "%2F";

/// Upload-metadata fields preceding the real asset name in an upload
/// URL's final path segment (space, space id, uploads, upload id).
const UPLOAD_METADATA_FIELDS: usize = 4;

/// Name used when sanitizing leaves nothing usable.
const FALLBACK_NAME: &str = "image";

/// Derive the local filename candidate for an image URL.
///
/// Takes the final path segment, strips the platform's upload-metadata
/// prefix when present, and sanitizes the remainder so it is safe as a
/// bare filename.
#[must_use]
pub fn candidate_file_name(url: &Url) -> String {
    let raw_name = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");
    let stripped = strip_upload_metadata(raw_name);
    let sanitized = sanitize_filename::sanitize(stripped);
    if sanitized.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        sanitized
    }
}

/// Drop the upload-metadata fields from an uploaded asset's name.
///
/// Upload URLs pack `spaces%2F<id>%2Fuploads%2F<id>%2F<asset name>` into
/// one path segment; only the trailing asset name is worth keeping.
/// Names without the metadata prefix pass through unchanged.
fn strip_upload_metadata(name: &str) -> String {
    let fields: Vec<&str> = name.split(ENCODED_SEPARATOR).collect();
    if fields.len() > UPLOAD_METADATA_FIELDS {
        fields[UPLOAD_METADATA_FIELDS..].join(ENCODED_SEPARATOR)
    } else {
        name.to_string()
    }
}

/// Append a numeric suffix ahead of the extension: `pic.png` becomes
/// `pic-2.png`, extensionless names get a plain `-2`.
fn suffixed_name(name: &str, suffix: usize) -> String {
    match name.rfind('.') {
        Some(index) if index > 0 => {
            format!("{}-{}.{}", &name[..index], suffix, &name[index + 1..])
        }
        _ => format!("{name}-{suffix}"),
    }
}

/// Serialized writer for one conversion's images.
///
/// Naming runs in discovery order, so the suffixes a page's images
/// receive are stable across runs. Names claimed in this run are never
/// reassigned to different bytes, whatever the overwrite policy.
pub struct ImageStore {
    dir: PathBuf,
    overwrite: bool,
    /// file name -> hash of the bytes stored under it this run
    claimed: HashMap<String, u64>,
}

impl ImageStore {
    #[must_use]
    pub fn new(dir: PathBuf, overwrite: bool) -> Self {
        Self {
            dir,
            overwrite,
            claimed: HashMap::new(),
        }
    }

    /// Write `bytes` under a name derived from `url` and return the path
    /// used.
    ///
    /// Collisions disambiguate with numeric suffixes. A name already
    /// holding identical bytes (from this run or an earlier one) is
    /// adopted instead of duplicated, which keeps repeat conversions
    /// from littering the image directory.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::Filesystem` for any write or read failure
    /// other than an exclusive-create conflict.
    pub async fn store(&mut self, url: &Url, bytes: &[u8]) -> Result<PathBuf, ConvertError> {
        let base_name = candidate_file_name(url);
        let hash = xxh3_64(bytes);

        let mut suffix = 0usize;
        loop {
            let candidate = if suffix == 0 {
                base_name.clone()
            } else {
                suffixed_name(&base_name, suffix)
            };
            suffix += 1;

            if let Some(&claimed_hash) = self.claimed.get(&candidate) {
                if claimed_hash == hash {
                    // Byte-identical duplicate stored earlier this run.
                    return Ok(self.dir.join(candidate));
                }
                continue;
            }

            let path = self.dir.join(&candidate);

            if self.overwrite {
                tokio::fs::write(&path, bytes)
                    .await
                    .map_err(|e| ConvertError::filesystem(&path, e))?;
                log::debug!("stored image {} ({} bytes)", path.display(), bytes.len());
                self.claimed.insert(candidate, hash);
                return Ok(path);
            }

            // The exclusive create is the point of truth: no existence
            // check races against concurrent conversions.
            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut file) => {
                    file.write_all(bytes)
                        .await
                        .map_err(|e| ConvertError::filesystem(&path, e))?;
                    log::debug!("stored image {} ({} bytes)", path.display(), bytes.len());
                    self.claimed.insert(candidate, hash);
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    let existing = tokio::fs::read(&path)
                        .await
                        .map_err(|e| ConvertError::filesystem(&path, e))?;
                    if existing.as_slice() == bytes {
                        // An earlier run already stored this image.
                        log::debug!("adopting existing image {}", path.display());
                        self.claimed.insert(candidate, hash);
                        return Ok(path);
                    }
                    // Different bytes own the name; try the next suffix.
                }
                Err(e) => return Err(ConvertError::filesystem(&path, e)),
            }
        }
    }
}
