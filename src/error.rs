//! Error types for corpus loading operations
//!
//! Every failure is fatal: malformed data and unknown configurations are
//! surfaced to the caller unmodified, with no retry or skip semantics.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for corpus loading operations
pub type Result<T> = std::result::Result<T, JsnliError>;

/// Errors that can occur while resolving, fetching, or reading the corpus
#[derive(Debug, Error)]
pub enum JsnliError {
    /// Configuration name matched none of the declared configs
    #[error("Invalid config name: {name}")]
    UnknownConfig { name: String },

    /// A TSV line did not split into exactly three fields
    #[error("Malformed line {line} in {path}: expected 3 tab-separated fields, got {fields}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        fields: usize,
    },

    /// Label string outside the declared class names
    #[error("Unknown label {label:?}: expected one of entailment, neutral, contradiction")]
    UnknownLabel { label: String },

    /// Resolved split file is absent from the extracted archive
    #[error("Split file not found: {path}")]
    SplitFileMissing { path: PathBuf },

    /// HTTP transport failure during download
    #[error("HTTP error: {message}")]
    HttpError { message: String },

    /// Download endpoint returned a non-success status
    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Archive error
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JsnliError {
    /// Check if error stems from configuration selection
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::UnknownConfig { .. })
    }

    /// Check if error stems from the corpus data itself
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::MalformedLine { .. } | Self::UnknownLabel { .. })
    }

    /// Check if error stems from the download/extract step
    #[must_use]
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError { .. } | Self::HttpStatus { .. } | Self::Zip(_)
        )
    }
}
