//! Dataset split types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Dataset split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Split {
    /// Training split
    Train,
    /// Validation split
    Validation,
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Train => write!(f, "train"),
            Self::Validation => write!(f, "validation"),
        }
    }
}

/// A split bound to its resolved source file
///
/// The path is the sole input to record generation for that split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitGenerator {
    /// Which split this file feeds
    pub split: Split,
    /// Resolved TSV path inside the extracted archive
    pub tsv_path: PathBuf,
}

impl SplitGenerator {
    /// Bind a split to a source file
    #[must_use]
    pub fn new(split: Split, tsv_path: impl Into<PathBuf>) -> Self {
        Self { split, tsv_path: tsv_path.into() }
    }
}
