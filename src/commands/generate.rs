//! Generates random offers from fetched mock data and streams them to a file.

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::file_writer::write_lines;
use crate::mock_server::fetch_mock_server_data;
use crate::tsv::create_offer_tsv_row;

/// Parses the `<n>` argument. Zero is allowed and produces an empty file;
/// anything that is not a non-negative integer is an argument error.
pub fn parse_count(raw: &str) -> Result<u64> {
    raw.parse().map_err(|_| {
        Error::InvalidArgument(format!(
            "<n> must be a non-negative integer, got \"{raw}\""
        ))
    })
}

/// Fetches the mock pools once, then writes `count` generated rows to `path`.
pub async fn run(count: u64, path: &Path, url: &str) -> Result<u64> {
    let mock_data = fetch_mock_server_data(url).await?;
    write_lines(count, path, || create_offer_tsv_row(&mock_data)).await?;

    info!("File created: {}", path.display());
    info!("Generated rows: {}", count);
    Ok(count)
}
