//! Builder configurations for the JSNLI corpus
//!
//! Two named configurations exist, differing only in which pre-supplied
//! training file they select. The validation file is shared.

use serde::{Deserialize, Serialize};

use crate::error::{JsnliError, Result};

/// Corpus version, also embedded in the archive's directory name
pub const CORPUS_VERSION: Version = Version::new(1, 1, 0);

/// Dataset version tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a version from its components
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Named corpus configuration
///
/// `WithFiltering` selects the machine-filtered training pairs,
/// `WithoutFiltering` the raw translated pairs. Both read the same
/// crowdsourced validation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JsnliConfig {
    /// Training pairs filtered by BLEU score threshold 0.1 (533,005 pairs)
    WithFiltering,
    /// Unfiltered machine-translated training pairs (548,014 pairs)
    WithoutFiltering,
}

impl JsnliConfig {
    /// All declared configurations, in declaration order
    pub const ALL: [Self; 2] = [Self::WithFiltering, Self::WithoutFiltering];

    /// Resolve a configuration from its name
    ///
    /// Matching is substring-based: any name containing `with-filtering`
    /// selects [`Self::WithFiltering`], any containing `without-filtering`
    /// selects [`Self::WithoutFiltering`].
    ///
    /// # Errors
    ///
    /// Returns [`JsnliError::UnknownConfig`] for any other name. There is
    /// no silent fallback.
    pub fn from_name(name: &str) -> Result<Self> {
        if name.contains("with-filtering") {
            Ok(Self::WithFiltering)
        } else if name.contains("without-filtering") {
            Ok(Self::WithoutFiltering)
        } else {
            Err(JsnliError::UnknownConfig { name: name.to_string() })
        }
    }

    /// Configuration name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::WithFiltering => "with-filtering",
            Self::WithoutFiltering => "without-filtering",
        }
    }

    /// Version tag carried by this configuration
    #[must_use]
    pub fn version(self) -> Version {
        CORPUS_VERSION
    }

    /// Human-readable description, as published with the corpus
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::WithFiltering => {
                "SNLIの学習データに機械翻訳を適用した後、BLEUスコアの閾値0.1でフィルタリングを施したもの。\
                 BERTにこの学習データを学習させることにより、93.0%の精度を記録した。(533,005ペア)"
            }
            Self::WithoutFiltering => {
                "SNLIの学習データに機械翻訳を適用したもの。フィルタリングは行っていない。(548,014ペア)"
            }
        }
    }

    /// Training file this configuration selects inside the archive
    #[must_use]
    pub fn train_file(self) -> &'static str {
        match self {
            Self::WithFiltering => "train_w_filtering.tsv",
            Self::WithoutFiltering => "train_wo_filtering.tsv",
        }
    }
}

impl Default for JsnliConfig {
    // Upstream declares no default, but its published tests load the
    // corpus without a name and expect the filtered split's row counts.
    fn default() -> Self {
        Self::WithFiltering
    }
}

impl std::fmt::Display for JsnliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
