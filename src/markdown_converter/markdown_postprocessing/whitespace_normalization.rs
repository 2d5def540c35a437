//! Whitespace and invisible-character normalization.

use regex::Regex;
use std::sync::LazyLock;

/// Zero-width space the platform's editor sprinkles through rendered
/// text for cursor positioning.
const ZERO_WIDTH_SPACE: char = '\u{200B}';

static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("EXCESS_BLANK_LINES: hardcoded regex is valid"));

/// Remove zero-width space characters.
pub fn strip_zero_width_spaces(markdown: &str) -> String {
    markdown.replace(ZERO_WIDTH_SPACE, "")
}

/// Collapse runs of three or more newlines into a single blank line.
pub fn collapse_excess_blank_lines(markdown: &str) -> String {
    EXCESS_BLANK_LINES.replace_all(markdown, "\n\n").to_string()
}
