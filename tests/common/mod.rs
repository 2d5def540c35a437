//! Test utilities and helper functions for the docport test suite

use anyhow::Result;
use mockito::{Mock, Server};
use tempfile::TempDir;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Spins up a local HTTP server for serving fake images
#[allow(dead_code)]
pub async fn setup_mock_server() -> Result<mockito::ServerGuard> {
    let server = Server::new_async().await;
    Ok(server)
}

/// Creates a mock endpoint that returns image bytes
#[allow(dead_code)]
pub async fn create_image_mock(server: &mut Server, path: &str, bytes: &[u8]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(bytes)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error status
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Fake PNG payload, distinct per tag so byte comparisons mean something
#[allow(dead_code)]
pub fn png_bytes(tag: &str) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(tag.as_bytes());
    bytes
}

/// Renders a page the way the hosted documentation platform does: the
/// title and description live in a masthead outside the content region,
/// the article body inside it.
#[allow(dead_code)]
pub fn render_page_html(title: &str, description: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{title}</title></head>
<body>
    <header><nav>Home | Guides | Reference</nav></header>
    <div class="page">
        <div class="masthead">
            <div>
                <div>
                    <h1 data-testid="page.title">{title}</h1>
                    <p>{description}</p>
                </div>
            </div>
        </div>
        <div data-testid="page.contentEditor">
            {content}
        </div>
    </div>
</body>
</html>"#
    )
}
