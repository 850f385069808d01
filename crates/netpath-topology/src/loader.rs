//! # Edge Feed Loader
//!
//! Reads the comma-delimited edge feed:
//!
//! ```text
//! src_ip,dst_ip,src_lng,src_lat,cost,city
//! 10.0.0.1,10.0.0.2,1.0,2.0,4,CityA
//! ```
//!
//! Exactly one leading header row is skipped. Rows may have differing
//! widths; short rows and rows with unparseable numbers are skipped by the
//! store's ingestion policy. Rows the CSV layer cannot decode (invalid
//! UTF-8) are skipped too. Only failing to open or read the file is fatal.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::store::{TopologyBuilder, TopologyStore};

/// Fatal errors while loading an edge feed.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The feed file could not be opened.
    #[error("cannot open edge feed {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the feed failed part-way through.
    #[error("failed reading edge feed: {0}")]
    Read(#[source] csv::Error),
}

/// Load a topology from a CSV file on disk.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be opened and
/// [`LoadError::Read`] on an I/O failure while reading it.
pub fn load_csv(path: impl AsRef<Path>) -> Result<TopologyStore, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loading edge feed");
    from_reader(file)
}

/// Load a topology from any CSV byte source.
///
/// # Errors
///
/// Returns [`LoadError::Read`] on an I/O failure in the underlying reader.
pub fn from_reader<R: Read>(reader: R) -> Result<TopologyStore, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut builder = TopologyBuilder::new();
    for (index, result) in rdr.records().enumerate() {
        // Data rows start after the header on line 2.
        let fallback_line = index as u64 + 2;
        match result {
            Ok(record) => {
                let line = record.position().map_or(fallback_line, |p| p.line());
                let fields: Vec<&str> = record.iter().collect();
                let _ = builder.push_fields(line, &fields);
            }
            Err(err) if err.is_io_error() => return Err(LoadError::Read(err)),
            Err(err) => {
                let line = err.position().map_or(fallback_line, |p| p.line());
                builder.record_skip(line, &err);
            }
        }
    }

    Ok(builder.finish())
}
