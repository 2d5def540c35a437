//! Serializes a converted page to a frontmatter-markdown file on disk.
//!
//! The file name is either the configured override or a slug derived from
//! the page title. Existing files are skipped unless overwrite is enabled;
//! creation goes through an exclusive create so two converters racing on the
//! same name cannot both claim the write.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::config::ConvertConfig;
use crate::errors::ConvertError;
use crate::pipeline::PageContent;
use crate::utils::PAGE_FILE_EXTENSION;

/// What happened to the page file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WriteOutcome {
    /// The file was created, or replaced under the overwrite policy.
    Written(PathBuf),
    /// A file already existed at the path and overwrite was disabled.
    Skipped(PathBuf),
}

impl WriteOutcome {
    /// The path this outcome refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written(path) | WriteOutcome::Skipped(path) => path,
        }
    }
}

/// Quote a title for the frontmatter block, completing any quoting the
/// title already carries on one end.
fn quote_title(title: &str) -> String {
    let mut quoted = String::with_capacity(title.len() + 2);
    if !title.starts_with('"') {
        quoted.push('"');
    }
    quoted.push_str(title);
    if !title.ends_with('"') {
        quoted.push('"');
    }
    quoted
}

/// Derive a filesystem- and URL-safe slug from a title: every
/// non-alphanumeric character becomes a separator, runs collapse to a
/// single hyphen, and the result is lowercased.
fn slugify(title: &str) -> String {
    let spaced: String = title
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn resolve_file_name(title: &str, config: &ConvertConfig) -> String {
    match config.file_name() {
        Some(name) if name.ends_with(PAGE_FILE_EXTENSION) => name.to_string(),
        Some(name) => format!("{name}{PAGE_FILE_EXTENSION}"),
        None => format!("{}{}", slugify(title), PAGE_FILE_EXTENSION),
    }
}

/// Render the full file body: frontmatter block, blank line, markdown.
/// The description line is omitted when the page has no description.
fn render_page(page: &PageContent) -> String {
    let mut rendered = String::with_capacity(page.markdown.len() + 64);
    rendered.push_str("---\n");
    rendered.push_str("title: ");
    rendered.push_str(&quote_title(&page.title));
    rendered.push('\n');
    if let Some(description) = &page.description {
        rendered.push_str("description: \"");
        rendered.push_str(description);
        rendered.push_str("\"\n");
    }
    rendered.push_str("---\n\n");
    rendered.push_str(&page.markdown);
    rendered
}

/// Write `page` under the configured content root.
///
/// Returns [`WriteOutcome::Skipped`] when the target file already exists
/// and overwrite is disabled; a skip is a normal outcome, not an error.
///
/// # Errors
///
/// Returns `ConvertError::Filesystem` when the content root cannot be
/// created or the file cannot be written.
pub async fn write_page(
    page: &PageContent,
    config: &ConvertConfig,
) -> Result<WriteOutcome, ConvertError> {
    let file_name = resolve_file_name(&page.title, config);
    let path = config.content_root().join(&file_name);
    let rendered = render_page(page);

    tokio::fs::create_dir_all(config.content_root())
        .await
        .map_err(|source| ConvertError::filesystem(config.content_root(), source))?;

    if config.overwrite() {
        tokio::fs::write(&path, rendered.as_bytes())
            .await
            .map_err(|source| ConvertError::filesystem(&path, source))?;
        log::info!("Wrote page to {}", path.display());
        return Ok(WriteOutcome::Written(path));
    }

    match tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
    {
        Ok(mut file) => {
            file.write_all(rendered.as_bytes())
                .await
                .map_err(|source| ConvertError::filesystem(&path, source))?;
            log::info!("Wrote page to {}", path.display());
            Ok(WriteOutcome::Written(path))
        }
        Err(error) if error.kind() == ErrorKind::AlreadyExists => {
            log::info!(
                "Page file already exists at {}, skipping (enable overwrite to replace)",
                path.display()
            );
            Ok(WriteOutcome::Skipped(path))
        }
        Err(error) => Err(ConvertError::filesystem(&path, error)),
    }
}
