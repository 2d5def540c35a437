//! Concurrent image fetching.

use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;

use super::DiscoveredImage;
use crate::errors::{AssetFetchError, ConvertError};
use crate::utils::CHROME_USER_AGENT;

/// Build the HTTP client shared by all fetches of one conversion.
///
/// # Errors
///
/// Returns `ConvertError::HttpClient` when the TLS backend cannot be
/// initialized.
pub fn build_client(timeout: Duration) -> Result<Client, ConvertError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(CHROME_USER_AGENT)
        .build()
        .map_err(|e| ConvertError::HttpClient(e.to_string()))
}

/// Download all images concurrently.
///
/// The result vector is parallel to `images`, so callers can zip the two
/// back together; `join_all` keeps completion results in input order.
/// Timeouts and non-2xx statuses become per-image failures.
pub async fn fetch_all(
    client: &Client,
    images: &[DiscoveredImage],
) -> Vec<Result<Vec<u8>, AssetFetchError>> {
    // Create futures for concurrent execution
    let futures = images.iter().map(|image| {
        let client = client.clone();
        let url = image.url.clone();

        async move {
            match fetch_bytes(&client, url.as_str()).await {
                Ok(bytes) => Ok(bytes),
                Err(e) => {
                    let reason = e.to_string();
                    log::warn!("Failed to download image from {url}: {reason}");
                    Err(AssetFetchError::new(url.as_str(), reason))
                }
            }
        }
    });

    join_all(futures).await
}

async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
