//! Error types for csvcolslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and extracting tables
#[derive(Error, Debug)]
pub enum CsvColsError {
    /// Failed to open or read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed CSV or invalid UTF-8 in a record
    #[error("failed to parse CSV in '{path}': {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Glob pattern matched no files
    #[error("no files match pattern: {0}")]
    NoMatches(String),

    /// Delimiter is not a single ASCII character
    #[error("delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(String),
}
