//! Download-and-extract collaborator
//!
//! The loader delegates all network and archive handling to a
//! [`DownloadManager`]; split resolution and record generation only ever
//! see the local base directory it returns.

mod download;
mod extract;

#[cfg(test)]
mod tests;

pub use download::{DownloadManager, HttpDownloadManager};
