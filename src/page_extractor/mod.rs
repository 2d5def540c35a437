//! Structural extraction of title, description, and content region.
//!
//! Selectors target stable structural markers the platform attaches to
//! its rendered pages, so irrelevant wrapper markup around them can
//! change without breaking extraction.

use kuchiki::NodeRef;

use crate::errors::{ConvertError, StructureError};

/// Selector for the page title element.
pub const TITLE_SELECTOR: &str = r#"[data-testid="page.title"]"#;

/// Selector for the main content region.
pub const CONTENT_SELECTOR: &str = r#"[data-testid="page.contentEditor"]"#;

/// Parent steps from the title element up to the container whose text
/// holds title plus description.
const DESCRIPTION_ANCESTOR_STEPS: usize = 3;

/// Title, description, and serialized content region of one page.
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// Trimmed title text. Never empty.
    pub title: String,
    /// Description text. May be empty.
    pub description: String,
    /// Serialized HTML of the content region subtree.
    pub content_html: String,
}

/// Extract title, description, and content region from a parsed page.
///
/// The description is recovered by taking the text of the container a
/// fixed number of parent steps above the title and subtracting the
/// title's own text from it, first occurrence only. If the title text
/// recurs inside the description, later occurrences survive; that
/// heuristic matches the platform's rendered layout.
///
/// # Errors
///
/// Returns `StructureError` when the title element is missing, the title
/// is empty after trimming, or the content region is missing.
pub fn extract_page(document: &NodeRef) -> Result<ExtractedPage, ConvertError> {
    let title_element = document
        .select(TITLE_SELECTOR)
        .map_err(|()| ConvertError::Selector(TITLE_SELECTOR))?
        .next()
        .ok_or(StructureError::TitleMissing(TITLE_SELECTOR))?;

    // Untrimmed: the description subtraction below must remove exactly
    // the text the container picked up from the title element.
    let raw_title = title_element.text_contents();
    let title = raw_title.trim().to_string();
    if title.is_empty() {
        return Err(StructureError::TitleEmpty.into());
    }

    let description = match nth_ancestor(title_element.as_node(), DESCRIPTION_ANCESTOR_STEPS) {
        Some(container) => container
            .text_contents()
            .replacen(&raw_title, "", 1)
            .trim()
            .to_string(),
        None => String::new(),
    };

    let content_element = document
        .select(CONTENT_SELECTOR)
        .map_err(|()| ConvertError::Selector(CONTENT_SELECTOR))?
        .next()
        .ok_or(StructureError::ContentMissing(CONTENT_SELECTOR))?;

    let content_html = serialize_node(content_element.as_node())?;

    log::debug!(
        "extracted page: title={:?}, description {} chars, content {} chars",
        title,
        description.len(),
        content_html.len()
    );

    Ok(ExtractedPage {
        title,
        description,
        content_html,
    })
}

/// Walk `steps` parents up from `node`; `None` when the chain ends early.
fn nth_ancestor(node: &NodeRef, steps: usize) -> Option<NodeRef> {
    let mut current = node.clone();
    for _ in 0..steps {
        current = current.parent()?;
    }
    Some(current)
}

/// Serialize a node's subtree back to HTML text.
pub(crate) fn serialize_node(node: &NodeRef) -> Result<String, ConvertError> {
    let mut output = Vec::new();
    node.serialize(&mut output)
        .map_err(|e| ConvertError::Serialize(e.to_string()))?;
    String::from_utf8(output).map_err(|e| ConvertError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink;

    fn parse(html: &str) -> NodeRef {
        kuchiki::parse_html().one(html.to_string())
    }

    #[test]
    fn trims_title_text() -> anyhow::Result<()> {
        let document = parse(
            r#"<div><div><div><h1 data-testid="page.title">  Getting Started  </h1></div></div></div>
               <div data-testid="page.contentEditor"><p>Body</p></div>"#,
        );

        let page = extract_page(&document)?;
        assert_eq!(page.title, "Getting Started");
        Ok(())
    }

    #[test]
    fn subtracts_title_from_description_container() -> anyhow::Result<()> {
        let document = parse(
            r#"<div>
                 <div><div><h1 data-testid="page.title">  Getting Started  </h1></div></div>
                 <p>Build your first project.</p>
               </div>
               <div data-testid="page.contentEditor"><p>Body</p></div>"#,
        );

        let page = extract_page(&document)?;
        assert_eq!(page.description, "Build your first project.");
        Ok(())
    }

    #[test]
    fn keeps_later_title_occurrences_in_description() -> anyhow::Result<()> {
        let document = parse(
            r#"<div>
                 <div><div><h1 data-testid="page.title">Getting Started</h1></div></div>
                 <p>How Getting Started works</p>
               </div>
               <div data-testid="page.contentEditor"><p>Body</p></div>"#,
        );

        let page = extract_page(&document)?;
        assert_eq!(page.description, "How Getting Started works");
        Ok(())
    }

    #[test]
    fn description_is_empty_when_container_adds_nothing() -> anyhow::Result<()> {
        let document = parse(
            r#"<div><div><div><h1 data-testid="page.title">Intro</h1></div></div></div>
               <div data-testid="page.contentEditor"><p>Body</p></div>"#,
        );

        let page = extract_page(&document)?;
        assert_eq!(page.description, "");
        Ok(())
    }

    #[test]
    fn serializes_only_the_content_region() -> anyhow::Result<()> {
        let document = parse(
            r#"<nav>Site menu</nav>
               <div><div><div><h1 data-testid="page.title">Intro</h1></div></div></div>
               <div data-testid="page.contentEditor"><p>Body text</p></div>"#,
        );

        let page = extract_page(&document)?;
        assert!(page.content_html.contains("Body text"));
        assert!(!page.content_html.contains("Site menu"));
        Ok(())
    }

    #[test]
    fn fails_without_title_element() {
        let document = parse(r#"<div data-testid="page.contentEditor"><p>Body</p></div>"#);
        let result = extract_page(&document);
        assert!(matches!(
            result,
            Err(ConvertError::Structure(StructureError::TitleMissing(_)))
        ));
    }

    #[test]
    fn fails_on_whitespace_only_title() {
        let document = parse(
            r#"<div><div><div><h1 data-testid="page.title">   </h1></div></div></div>
               <div data-testid="page.contentEditor"><p>Body</p></div>"#,
        );
        let result = extract_page(&document);
        assert!(matches!(
            result,
            Err(ConvertError::Structure(StructureError::TitleEmpty))
        ));
    }

    #[test]
    fn fails_without_content_region() {
        let document = parse(
            r#"<div><div><div><h1 data-testid="page.title">Intro</h1></div></div></div>"#,
        );
        let result = extract_page(&document);
        assert!(matches!(
            result,
            Err(ConvertError::Structure(StructureError::ContentMissing(_)))
        ));
    }
}
