use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between argument parsing and the final report.
///
/// Decode variants carry the 1-based line number and the field that failed so
/// import errors point at the exact spot in the file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("line {line}: expected {expected} fields, got {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: field \"images\" must contain exactly 6 links, got {found}")]
    ImagesCount { line: usize, found: usize },

    #[error("line {line}: field \"amenities\" must not be empty")]
    EmptyAmenities { line: usize },

    #[error("line {line}: invalid value for field \"{field}\": {value}")]
    InvalidEnumValue {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: field \"{field}\" must be true or false")]
    InvalidBoolean { line: usize, field: &'static str },

    #[error("line {line}: field \"{field}\" must be a number")]
    InvalidNumber { line: usize, field: &'static str },

    #[error("line {line}: field \"publishDate\" is not a valid ISO-8601 date: {value}")]
    InvalidDate { line: usize, value: String },

    #[error("failed to fetch mock data from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("mock data field \"{field}\" is missing or malformed")]
    InvalidMockData { field: &'static str },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
