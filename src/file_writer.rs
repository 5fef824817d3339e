//! Streaming write path for generated TSV files.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::Result;

/// Writes `count` newline-terminated rows to `path`, truncating any existing
/// file. Rows go through a buffered writer one at a time, so memory stays
/// bounded for large counts; the buffer is flushed and the file shut down
/// before success is reported. Any write error aborts and propagates, and the
/// handle is released on every exit path.
pub async fn write_lines<F>(count: u64, path: &Path, mut row_factory: F) -> Result<()>
where
    F: FnMut() -> String,
{
    let file = File::create(path).await?;
    let mut writer = BufWriter::new(file);

    for _ in 0..count {
        writer.write_all(row_factory().as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    writer.shutdown().await?;
    Ok(())
}
