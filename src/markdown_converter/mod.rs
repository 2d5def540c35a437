//! HTML to markdown conversion for extracted page content.

pub mod markdown_postprocessing;

use htmd::HtmlToMarkdown;
use htmd::options::{BulletListMarker, CodeBlockFence, CodeBlockStyle, HeadingStyle, Options};

use crate::errors::ConvertError;

/// Create the converter used for page bodies.
///
/// ATX headings, asterisk bullets, and backtick fences match the target
/// authoring format; `script` and `style` subtrees never carry content.
/// Code blocks are already flattened to `<pre><code>` before conversion,
/// so the default element handling is enough.
pub fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style"])
        .options(Options {
            heading_style: HeadingStyle::Atx,
            bullet_list_marker: BulletListMarker::Asterisk,
            code_block_style: CodeBlockStyle::Fenced,
            code_block_fence: CodeBlockFence::Backticks,
            ..Default::default()
        })
        .build()
}

/// Convert an HTML fragment to markdown.
///
/// # Errors
///
/// Returns `ConvertError::Markdown` when the converter rejects the input.
pub fn convert_html(html: &str) -> Result<String, ConvertError> {
    create_converter()
        .convert(html)
        .map_err(ConvertError::Markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_headings_and_paragraphs() -> anyhow::Result<()> {
        let markdown = convert_html("<h2>Install</h2><p>Run the tool.</p>")?;
        assert!(markdown.contains("## Install"));
        assert!(markdown.contains("Run the tool."));
        Ok(())
    }

    #[test]
    fn converts_pre_code_to_fenced_block() -> anyhow::Result<()> {
        let markdown = convert_html("<pre><code>let x = 1;\nlet y = 2;</code></pre>")?;
        assert!(markdown.contains("```"), "markdown: {markdown}");
        assert!(markdown.contains("let x = 1;\nlet y = 2;"));
        Ok(())
    }

    #[test]
    fn skips_script_and_style_content() -> anyhow::Result<()> {
        let markdown =
            convert_html("<p>Keep</p><script>alert(1)</script><style>p { color: red }</style>")?;
        assert!(markdown.contains("Keep"));
        assert!(!markdown.contains("alert"));
        assert!(!markdown.contains("color"));
        Ok(())
    }

    #[test]
    fn keeps_image_references_inline() -> anyhow::Result<()> {
        let markdown =
            convert_html(r#"<img src="https://cdn.example.com/pic.png" alt="diagram">"#)?;
        assert!(
            markdown.contains("https://cdn.example.com/pic.png"),
            "markdown: {markdown}"
        );
        Ok(())
    }
}
