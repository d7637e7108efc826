//! Error types for feedzip.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for feedzip operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for feedzip
///
/// Fatal variants abort the run before or during feed handling; per-entry
/// failures are handled at the entry boundary and never surface as this type
/// past the pipeline loop.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid caller input (bad URL, bad output directory)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// HTTP transport error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP request exceeded the fixed per-request timeout
    #[error("request timed out: {url}")]
    Timeout {
        /// The URL whose request timed out
        url: String,
    },

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {status} for {url}")]
    InvalidResponse {
        /// The requested URL
        url: String,
        /// The status code the server returned
        status: reqwest::StatusCode,
    },

    /// Feed document could not be parsed, or parsed to zero entries
    #[error("malformed feed: {0}")]
    MalformedFeed(String),

    /// Target archive file already exists
    #[error("output file already exists: {0}")]
    PathExists(PathBuf),

    /// Output directory does not exist or is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// ZIP container error
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
