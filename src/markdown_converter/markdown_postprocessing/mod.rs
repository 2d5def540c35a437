//! Ordered cleanup passes applied after markdown conversion.
//!
//! Each pass is a pure string transform and the order is load-bearing:
//! blank-line collapsing runs after zero-width stripping so a line made
//! of invisible characters first becomes genuinely empty, and bold
//! heading unwrapping runs last so it sees headings already on one line.

mod heading_cleanup;
mod whitespace_normalization;


/// Run every cleanup pass in order over converted markdown.
pub fn postprocess_markdown(markdown: &str) -> String {
    let markdown = collapse_empty_heading_lines(markdown);
    let markdown = strip_zero_width_spaces(&markdown);
    let markdown = collapse_excess_blank_lines(&markdown);
    unwrap_bold_headings(&markdown)
}

// Re-export public API
pub use heading_cleanup::collapse_empty_heading_lines;
pub use heading_cleanup::unwrap_bold_headings;
pub use whitespace_normalization::collapse_excess_blank_lines;
pub use whitespace_normalization::strip_zero_width_spaces;
