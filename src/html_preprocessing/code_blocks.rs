//! Flattens rich code-editor markup into plain `<pre><code>` blocks.
//!
//! The documentation platform renders code blocks as nested styled `div`s
//! with decorative accessibility elements instead of semantic markup.
//! Converting that structure to markdown directly loses all formatting,
//! so this pass rebuilds each block as a literal code element before the
//! converter runs.

use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

use crate::errors::ConvertError;

/// Detection pattern for the platform's rich code-editor blocks.
///
/// The editor marks its code surface with `spellcheck="false"`; the first
/// `div` underneath holds one child `div` per code line.
pub const CODE_BLOCK_PATTERN: &str = r#"[spellcheck="false"] div"#;

/// Decorative elements inside a code block (copy buttons, line-number
/// rails) that duplicate or pollute the code text.
const NON_EDITABLE_PATTERN: &str = r#"[contenteditable="false"]"#;

/// Replace every rich code-editor block in `document` with a
/// `<pre><code>` element wrapping the reconstructed code text.
///
/// Line text is rebuilt from the direct element children of the matched
/// block, skipping children left empty after decorative elements are
/// cleared. Running the pass on already-normalized markup matches nothing
/// and changes nothing.
///
/// # Returns
///
/// The number of blocks replaced.
///
/// # Errors
///
/// Returns `ConvertError::Selector` if a selector fails to compile.
pub fn normalize_code_blocks(document: &NodeRef) -> Result<usize, ConvertError> {
    // Must collect before iteration because we'll detach nodes
    let matches: Vec<_> = document
        .select(CODE_BLOCK_PATTERN)
        .map_err(|()| ConvertError::Selector(CODE_BLOCK_PATTERN))?
        .collect();

    if matches.is_empty() {
        return Ok(0);
    }

    log::debug!("found {} rich code blocks to normalize", matches.len());

    let mut replaced = 0;
    for code_block in matches {
        let node = code_block.as_node();

        // Nested matches sit inside a block replaced earlier in this
        // loop; they are no longer part of the document.
        if !is_attached(node, document) {
            continue;
        }

        clear_decorations(node)?;

        let lines: Vec<String> = node
            .children()
            .filter(|child| child.as_element().is_some())
            .map(|child| child.text_contents())
            .filter(|text| !text.is_empty())
            .collect();
        let code_text = lines.join("\n");

        let escaped_code = html_escape::encode_text(&code_text).to_string();
        let replacement_html = format!("<pre><code>{escaped_code}</code></pre>");

        // parse_html builds a full document around the fragment; pull the
        // pre element back out of it.
        let fragment = kuchiki::parse_html().one(replacement_html);
        let pre = fragment
            .select_first("pre")
            .map_err(|()| ConvertError::Selector("pre"))?;

        node.insert_before(pre.as_node().clone());
        node.detach();
        replaced += 1;
    }

    Ok(replaced)
}

/// Empty every non-editable decoration inside `node`.
fn clear_decorations(node: &NodeRef) -> Result<(), ConvertError> {
    let decorations: Vec<_> = node
        .select(NON_EDITABLE_PATTERN)
        .map_err(|()| ConvertError::Selector(NON_EDITABLE_PATTERN))?
        .collect();

    for decoration in decorations {
        let children: Vec<NodeRef> = decoration.as_node().children().collect();
        for child in children {
            child.detach();
        }
    }

    Ok(())
}

/// Whether `node` still hangs off the document root.
fn is_attached(node: &NodeRef, root: &NodeRef) -> bool {
    node.ancestors().any(|ancestor| &ancestor == root)
}
