//! Rewrites remote image references in converted markdown to local paths.
//!
//! After images have been downloaded, the markdown still references them by
//! their original URLs (absolute or as-written relative forms). This module
//! replaces every such reference with the path of the local copy, expressed
//! relative to the content root so the links survive static site builds.

use std::path::Path;

use crate::image_localizer::AssetMap;

/// Compute the reference text emitted into markdown for a local image file.
///
/// Images stored under the content root get a root-absolute reference
/// (`/images/logo.png`). Images stored elsewhere fall back to a relative
/// path from the content root, without the leading slash.
fn local_reference(image_path: &Path, content_root: &Path) -> String {
    if let Ok(under_root) = image_path.strip_prefix(content_root) {
        format!("/{}", to_forward_slashes(under_root))
    } else if let Some(relative) = pathdiff::diff_paths(image_path, content_root) {
        to_forward_slashes(&relative)
    } else {
        to_forward_slashes(image_path)
    }
}

fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Expand one reference into the textual forms a markdown converter may have
/// produced for it: verbatim, backslash-escaped parentheses, percent-encoded
/// parentheses, and percent-encoded spaces.
fn encoding_variants(reference: &str) -> Vec<String> {
    let mut variants = vec![reference.to_string()];

    if reference.contains(' ') {
        variants.push(reference.replace(' ', "%20"));
    }
    if reference.contains('(') || reference.contains(')') {
        for i in 0..variants.len() {
            let base = variants[i].clone();
            variants.push(base.replace('(', "\\(").replace(')', "\\)"));
            variants.push(base.replace('(', "%28").replace(')', "%29"));
        }
    }

    variants
}

/// Characters that open a reference in converted markdown or in
/// carried-over attribute syntax.
const REFERENCE_OPENERS: [char; 2] = ['(', '"'];

/// Whether a reference is an absolute URL rather than an as-written
/// relative form.
fn is_absolute_url(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

struct Replacement {
    original: String,
    local: String,
    /// Replace only right after a reference opener. Set for relative
    /// as-written sources, whose text can legitimately occur inside a
    /// longer unrelated URL.
    anchored: bool,
}

/// Replace every known image reference in `markdown` with the path of its
/// local copy.
///
/// Candidates cover both the resolved URL and each `src` attribute value as
/// it appeared in the HTML, in all encoding variants. Replacement runs
/// longest-first so a URL that is a prefix of another is never rewritten
/// out from under it. Absolute URLs are replaced at every literal
/// occurrence; relative as-written sources only where a reference opener
/// precedes them, so a bare file name never matches inside an unrelated
/// URL that happens to end with it. Images that failed to download have no
/// entry in the map and keep their original URLs.
pub fn rewrite_image_paths(markdown: &str, assets: &AssetMap, content_root: &Path) -> String {
    if assets.is_empty() {
        return markdown.to_string();
    }

    let mut replacements: Vec<Replacement> = Vec::new();
    for entry in assets.entries() {
        let local = local_reference(&entry.path, content_root);
        for source in entry.sources.iter().map(String::as_str).chain([entry.url.as_str()]) {
            let anchored = !is_absolute_url(source);
            for variant in encoding_variants(source) {
                if !variant.is_empty() && variant != local {
                    replacements.push(Replacement {
                        original: variant,
                        local: local.clone(),
                        anchored,
                    });
                }
            }
        }
    }

    // Longest-first; ties broken lexically so duplicates become adjacent.
    replacements.sort_by(|a, b| {
        b.original
            .len()
            .cmp(&a.original.len())
            .then_with(|| a.original.cmp(&b.original))
    });
    replacements.dedup_by(|a, b| a.original == b.original);

    let mut rewritten = markdown.to_string();
    for replacement in &replacements {
        if replacement.anchored {
            for opener in REFERENCE_OPENERS {
                let needle = format!("{opener}{}", replacement.original);
                if rewritten.contains(&needle) {
                    let local = format!("{opener}{}", replacement.local);
                    rewritten = rewritten.replace(&needle, &local);
                }
            }
        } else if rewritten.contains(replacement.original.as_str()) {
            rewritten = rewritten.replace(replacement.original.as_str(), &replacement.local);
        }
    }
    rewritten
}
