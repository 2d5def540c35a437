//! Configuration module for page conversion
//!
//! This module provides the `ConvertConfig` struct and its type-safe
//! builder for configuring conversions with validation and sensible
//! defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{ConvertConfigBuilder, WithOrigin};
pub use types::ConvertConfig;

#[cfg(test)]
mod tests {
    use super::ConvertConfig;

    #[test]
    fn builder_applies_defaults() -> anyhow::Result<()> {
        let config = ConvertConfig::builder()
            .origin("https://docs.example.com")
            .build()?;

        assert_eq!(config.origin(), "https://docs.example.com");
        assert_eq!(config.content_root(), std::path::Path::new("."));
        assert_eq!(config.image_dir(), std::path::Path::new("./images"));
        assert!(!config.overwrite());
        assert_eq!(config.file_name(), None);
        assert_eq!(config.fetch_timeout().as_secs(), 30);
        Ok(())
    }

    #[test]
    fn builder_normalizes_schemeless_origin() -> anyhow::Result<()> {
        let config = ConvertConfig::builder().origin("docs.example.com").build()?;
        assert_eq!(config.origin(), "https://docs.example.com");
        Ok(())
    }

    #[test]
    fn builder_rejects_unparseable_origin() {
        let result = ConvertConfig::builder().origin("https://").build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_zero_timeout() {
        let result = ConvertConfig::builder()
            .origin("https://docs.example.com")
            .fetch_timeout_secs(0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_honors_overrides() -> anyhow::Result<()> {
        let config = ConvertConfig::builder()
            .origin("https://docs.example.com")
            .content_root("out/docs")
            .image_dir("out/docs/assets")
            .overwrite(true)
            .file_name("intro")
            .fetch_timeout_secs(5)
            .build()?;

        assert_eq!(config.content_root(), std::path::Path::new("out/docs"));
        assert_eq!(config.image_dir(), std::path::Path::new("out/docs/assets"));
        assert!(config.overwrite());
        assert_eq!(config.file_name(), Some("intro"));
        assert_eq!(config.fetch_timeout().as_secs(), 5);
        Ok(())
    }
}
