//! Heading artifacts left behind by the platform's rendered markup.

use fancy_regex::Regex;
use std::sync::LazyLock;

/// A heading whose entire text is wrapped in bold markers, anchored to
/// the surrounding newlines. The lookahead leaves the trailing newline
/// unconsumed so back-to-back bold headings all match.
static BOLD_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\n#+) \*\*(.*)\*\*(?=\n)").expect("BOLD_HEADING: hardcoded regex is valid")
});

/// Rejoin a heading marker separated from its text by a blank line.
///
/// Empty heading bodies in the source convert to a bare `#` line, a
/// blank line, and then the text that belongs in the heading. The
/// needle matches the tail of deeper heading markers too, so every
/// level is covered.
pub fn collapse_empty_heading_lines(markdown: &str) -> String {
    markdown.replace("# \n\n", "# ")
}

/// Strip bold markers that wrap an entire heading's text.
///
/// The target authoring format renders headings bold already, so the
/// extra emphasis is redundant. Heading level and text are preserved;
/// bold spans inside a longer heading are left alone.
pub fn unwrap_bold_headings(markdown: &str) -> String {
    BOLD_HEADING.replace_all(markdown, "$1 $2").to_string()
}
