//! Fetches and validates the string pools used to synthesize offers.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::tsv::IMAGES_COUNT;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// String pools supplied by an external mock endpoint. Every pool is
/// guaranteed non-empty with non-empty elements once validation passes.
#[derive(Debug, Clone)]
pub struct MockServerData {
    pub titles: Vec<String>,
    pub descriptions: Vec<String>,
    pub preview_images: Vec<String>,
    pub images: Vec<String>,
    pub user_names: Vec<String>,
    pub user_emails: Vec<String>,
}

fn string_pool(body: &Value, field: &'static str) -> Result<Vec<String>> {
    let items = body
        .get(field)
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(Error::InvalidMockData { field })?;

    items
        .iter()
        .map(|item| match item.as_str() {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(Error::InvalidMockData { field }),
        })
        .collect()
}

/// Checks the six required pools are present, non-empty arrays of non-empty
/// strings, naming the first offending field otherwise. The images pool must
/// additionally hold at least 6 links: every offer samples 6 images without
/// replacement, so a smaller pool could never produce a decodable line.
pub fn validate_mock_server_data(body: &Value) -> Result<MockServerData> {
    let data = MockServerData {
        titles: string_pool(body, "titles")?,
        descriptions: string_pool(body, "descriptions")?,
        preview_images: string_pool(body, "previewImages")?,
        images: string_pool(body, "images")?,
        user_names: string_pool(body, "userNames")?,
        user_emails: string_pool(body, "userEmails")?,
    };

    if data.images.len() < IMAGES_COUNT {
        return Err(Error::InvalidMockData { field: "images" });
    }

    Ok(data)
}

/// Single bounded GET against the mock endpoint. No retry; the caller decides
/// whether another attempt makes sense.
pub async fn fetch_mock_server_data(url: &str) -> Result<MockServerData> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

    debug!("Fetching mock data from {}", url);

    let body: Value = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?
        .json()
        .await
        .map_err(|source| Error::Fetch {
            url: url.to_string(),
            source,
        })?;

    validate_mock_server_data(&body)
}
