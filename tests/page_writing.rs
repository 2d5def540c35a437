//! Output file behavior: naming, frontmatter layout, overwrite policy.

mod common;

use common::{create_test_dir, render_page_html};
use docport::{ConvertConfig, WriteOutcome, convert_and_write_page};

#[tokio::test]
async fn test_explicit_file_name_override() {
    let html = render_page_html("Getting Started", "First steps.", "<p>Welcome.</p>");

    let dir = create_test_dir().expect("tempdir");
    let config = ConvertConfig::builder()
        .origin("https://docs.example.com")
        .content_root(dir.path())
        .file_name("index")
        .build()
        .expect("valid config");

    let report = convert_and_write_page(&html, &config).await.expect("conversion");

    assert_eq!(
        report.outcome,
        WriteOutcome::Written(dir.path().join("index.md"))
    );
    assert!(!dir.path().join("getting-started.md").exists());
}

#[tokio::test]
async fn test_frontmatter_carries_title_and_description() {
    let html = render_page_html("Getting Started", "First steps.", "<p>Welcome.</p>");

    let dir = create_test_dir().expect("tempdir");
    let config = ConvertConfig::builder()
        .origin("https://docs.example.com")
        .content_root(dir.path())
        .build()
        .expect("valid config");

    convert_and_write_page(&html, &config).await.expect("conversion");

    let contents = tokio::fs::read_to_string(dir.path().join("getting-started.md"))
        .await
        .expect("page file");
    assert!(
        contents.starts_with(
            "---\ntitle: \"Getting Started\"\ndescription: \"First steps.\"\n---\n\n"
        ),
        "got: {contents}"
    );
    assert!(contents.contains("Welcome."));
}

#[tokio::test]
async fn test_empty_description_omits_frontmatter_line() {
    let html = render_page_html("Bare", "", "<p>Body.</p>");

    let dir = create_test_dir().expect("tempdir");
    let config = ConvertConfig::builder()
        .origin("https://docs.example.com")
        .content_root(dir.path())
        .build()
        .expect("valid config");

    convert_and_write_page(&html, &config).await.expect("conversion");

    let contents = tokio::fs::read_to_string(dir.path().join("bare.md"))
        .await
        .expect("page file");
    assert!(contents.starts_with("---\ntitle: \"Bare\"\n---\n\n"), "got: {contents}");
    assert!(!contents.contains("description:"));
}

#[tokio::test]
async fn test_overwrite_replaces_page_file() {
    let dir = create_test_dir().expect("tempdir");
    let config = ConvertConfig::builder()
        .origin("https://docs.example.com")
        .content_root(dir.path())
        .overwrite(true)
        .build()
        .expect("valid config");

    let original = render_page_html("Guide", "Old intro.", "<p>Old body.</p>");
    convert_and_write_page(&original, &config).await.expect("first run");

    let updated = render_page_html("Guide", "New intro.", "<p>New body.</p>");
    let second = convert_and_write_page(&updated, &config).await.expect("second run");

    assert!(matches!(second.outcome, WriteOutcome::Written(_)));
    let contents = tokio::fs::read_to_string(dir.path().join("guide.md"))
        .await
        .expect("page file");
    assert!(contents.contains("New intro."), "got: {contents}");
    assert!(contents.contains("New body."), "got: {contents}");
    assert!(!contents.contains("Old body."), "got: {contents}");
}
