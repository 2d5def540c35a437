//! End-to-end page conversion: rendered HTML in, frontmatter markdown
//! and local images out.
//!
//! Stage order is fixed. Code blocks are normalized against the full
//! document, extraction isolates title/description/content, images are
//! discovered and localized from the content region, conversion and path
//! rewriting run over the region's markdown, and postprocessing cleans
//! the final text. Rewriting runs before postprocessing so reference
//! matching sees the converter's output verbatim.

use serde::Serialize;
use url::Url;

use kuchiki::traits::TendrilSink;

use crate::config::ConvertConfig;
use crate::errors::{AssetFetchError, ConvertError};
use crate::html_preprocessing::normalize_code_blocks;
use crate::image_localizer::{discover_images, localize_images};
use crate::markdown_converter::convert_html;
use crate::markdown_converter::markdown_postprocessing::postprocess_markdown;
use crate::page_extractor::extract_page;
use crate::page_writer::{self, WriteOutcome};
use crate::path_rewriter::rewrite_image_paths;

/// Converted page content, ready to write or serialize.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    /// Page title from the rendered document.
    pub title: String,
    /// Page description, when the layout carried one.
    pub description: Option<String>,
    /// Final markdown body.
    pub markdown: String,
}

/// Result of converting one page.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedPage {
    /// The converted content.
    pub page: PageContent,
    /// Images that could not be localized. Their references keep the
    /// original remote URLs in the markdown.
    pub failed_images: Vec<AssetFetchError>,
}

/// Result of converting and writing one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    /// What happened to the page file on disk.
    pub outcome: WriteOutcome,
    /// Images that could not be localized.
    pub failed_images: Vec<AssetFetchError>,
}

/// Convert one rendered documentation page to markdown, downloading the
/// images it references below the configured image directory.
///
/// Individual image failures never abort the conversion; they are
/// collected on the returned [`ConvertedPage`].
///
/// # Errors
///
/// Returns `ConvertError` when the configured origin does not parse,
/// the document lacks the expected title or content region, markdown
/// conversion fails, or an image cannot be written to disk.
pub async fn convert_page(
    html: &str,
    config: &ConvertConfig,
) -> Result<ConvertedPage, ConvertError> {
    let origin = Url::parse(config.origin()).map_err(|e| ConvertError::Origin {
        origin: config.origin().to_string(),
        reason: e.to_string(),
    })?;

    // All DOM work happens before the first await: kuchiki trees are
    // Rc-based, and holding one across an await would make this future
    // non-Send.
    let (extracted, discovered, mut failed_images) = {
        let document = kuchiki::parse_html().one(html.to_string());

        let flattened = normalize_code_blocks(&document)?;
        if flattened > 0 {
            log::debug!("normalized {flattened} code blocks");
        }

        let extracted = extract_page(&document)?;

        let content = kuchiki::parse_html().one(extracted.content_html.clone());
        let (discovered, resolution_failures) = discover_images(&content, &origin)?;
        (extracted, discovered, resolution_failures)
    };

    let (assets, fetch_failures) = localize_images(discovered, config).await?;
    failed_images.extend(fetch_failures);

    let markdown = convert_html(&extracted.content_html)?;
    let markdown = rewrite_image_paths(&markdown, &assets, config.content_root());
    let markdown = postprocess_markdown(&markdown);

    let description = if extracted.description.is_empty() {
        None
    } else {
        Some(extracted.description)
    };

    Ok(ConvertedPage {
        page: PageContent {
            title: extracted.title,
            description,
            markdown,
        },
        failed_images,
    })
}

/// Write converted page content under the configured content root.
///
/// # Errors
///
/// Returns `ConvertError::Filesystem` when the file cannot be written.
pub async fn write_page(
    page: &PageContent,
    config: &ConvertConfig,
) -> Result<WriteOutcome, ConvertError> {
    page_writer::write_page(page, config).await
}

/// Convert a rendered page and write the result in one step.
///
/// # Errors
///
/// Fails under the same conditions as [`convert_page`] and
/// [`write_page`]; image fetch failures are reported on the
/// [`PageReport`] rather than raised.
pub async fn convert_and_write_page(
    html: &str,
    config: &ConvertConfig,
) -> Result<PageReport, ConvertError> {
    let converted = convert_page(html, config).await?;
    if !converted.failed_images.is_empty() {
        log::warn!(
            "{} image(s) could not be localized for page {:?}",
            converted.failed_images.len(),
            converted.page.title
        );
    }

    let outcome = write_page(&converted.page, config).await?;
    Ok(PageReport {
        outcome,
        failed_images: converted.failed_images,
    })
}
