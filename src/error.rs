//! Error types for the extraction library.
//!
//! Matching and validation never fail: a rejected candidate is simply left
//! out of the result. Errors only arise at the input/output boundary.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type alias for extraction operations.
pub type ExtractorResult<T> = Result<T, ExtractorError>;

/// Error type for the boundary operations around a scan.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Error occurred while reading or writing files
    #[error("IO error for path '{}': {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },

    /// Input file is not UTF-8 text
    #[error("Input '{}' is not valid UTF-8 text", .path.display())]
    InvalidEncoding {
        path: PathBuf,
        source: FromUtf8Error,
    },

    /// Input exceeds the configured size bound
    #[error("Input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    /// Result could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}
