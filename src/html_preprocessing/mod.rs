//! DOM preprocessing that runs before markdown conversion.
//!
//! The only pass today is the rich code-block normalizer; it is the one
//! place that knows about the platform's editor markup, so structural
//! changes upstream stay contained here.

pub mod code_blocks;

pub use code_blocks::{CODE_BLOCK_PATTERN, normalize_code_blocks};
