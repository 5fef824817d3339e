//! Imports offers from a TSV file, reporting how many decoded.

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::error::{Error, Result};
use crate::tsv::parse_offer_line;

/// Streams `path` line by line, decodes every non-blank line and returns the
/// imported count.
///
/// Lines are numbered by their 1-based physical position, blanks included, so
/// a reported line number matches what an editor shows. Blank lines are
/// skipped, never errors; the first decode failure aborts the whole import —
/// silently dropping bad records would corrupt the seed data.
pub async fn run(path: &Path) -> Result<usize> {
    let file = File::open(path).await.map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Io(err)
        }
    })?;

    let reader = BufReader::new(file);
    let mut lines = reader.lines();
    let mut line_number = 0;
    let mut imported = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;

        // `lines()` strips `\n`; trimming also drops the `\r` of `\r\n` files.
        let prepared = line.trim();
        if prepared.is_empty() {
            continue;
        }

        parse_offer_line(prepared, line_number)?;
        imported += 1;
    }

    info!("Import finished: {} offers", imported);
    Ok(imported)
}
