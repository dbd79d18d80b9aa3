//! Corpus records, splits, and the lazy TSV record reader
//!
//! One record per non-empty line of a split file, keyed by a zero-based
//! counter scoped to that file. Reading is forward-only and any malformed
//! line aborts generation for the whole split.

mod dataset_impl;
mod example;
mod label;
mod reader;
mod split;


pub use dataset_impl::{Dataset, DatasetDict};
pub use example::NliExample;
pub use label::Label;
pub use reader::TsvRecords;
pub use split::{Split, SplitGenerator};
