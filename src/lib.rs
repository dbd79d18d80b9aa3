//! JSNLI corpus loader
//!
//! Downloads the JSNLI (Japanese SNLI) archive, resolves its training and
//! validation TSV files, and exposes each row as a typed
//! premise/hypothesis/label record.
//!
//! # Features
//!
//! - Two named configurations, `with-filtering` and `without-filtering`,
//!   differing only in which training file they select
//! - Lazy, forward-only record generation with zero-based record ids
//! - Hard failure on malformed lines and unknown configuration names
//! - Pluggable download/extract collaborator with an on-disk archive cache
//!
//! # Example
//!
//! ```ignore
//! use jsnli::{JsnliBuilder, JsnliConfig};
//!
//! let builder = JsnliBuilder::new(JsnliConfig::WithFiltering);
//! let corpus = builder.load()?;
//! assert_eq!(corpus.train.len(), 533_005);
//! assert_eq!(corpus.validation.len(), 3_916);
//! ```

mod builder;
mod config;
mod dataset;
mod error;
mod fetcher;
mod info;

pub use builder::{JsnliBuilder, SOURCE_URL};
pub use config::{JsnliConfig, Version, CORPUS_VERSION};
pub use dataset::{Dataset, DatasetDict, Label, NliExample, Split, SplitGenerator, TsvRecords};
pub use error::{JsnliError, Result};
pub use fetcher::{DownloadManager, HttpDownloadManager};
pub use info::{DatasetInfo, Feature, Features};
