//! Converts externally hosted documentation pages into local
//! frontmatter-markdown files, downloading every referenced image and
//! rewriting its reference to the local copy.

pub mod config;
pub mod errors;
pub mod html_preprocessing;
pub mod image_localizer;
pub mod markdown_converter;
pub mod page_extractor;
pub mod page_writer;
pub mod path_rewriter;
pub mod pipeline;
pub mod utils;

pub use config::{ConvertConfig, ConvertConfigBuilder, WithOrigin};
pub use errors::{AssetFetchError, ConvertError, StructureError};
pub use image_localizer::{AssetMap, LocalizedImage};
pub use page_writer::WriteOutcome;
pub use pipeline::{
    ConvertedPage, PageContent, PageReport, convert_and_write_page, convert_page, write_page,
};
