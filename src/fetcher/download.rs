//! HTTP download manager with an on-disk archive cache

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{JsnliError, Result};

use super::extract::extract_zip;

/// Resolves a source URL to a local base directory holding the extracted
/// archive contents
///
/// Implementations own downloading, caching, and extraction; callers only
/// see the returned directory.
pub trait DownloadManager {
    /// Download the archive at `url` (if needed) and return the directory
    /// it was extracted into
    ///
    /// # Errors
    ///
    /// Returns an error if the download or extraction fails.
    fn download_and_extract(&self, url: &str) -> Result<PathBuf>;
}

/// Blocking HTTP implementation of [`DownloadManager`]
///
/// Archives are cached under the platform cache directory, keyed by the
/// source URL; a previously extracted archive is reused without touching
/// the network.
pub struct HttpDownloadManager {
    client: reqwest::blocking::Client,
    cache_dir: PathBuf,
}

impl HttpDownloadManager {
    /// Create a manager using the default cache directory
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("jsnli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| JsnliError::HttpError {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, cache_dir: Self::default_cache_dir() })
    }

    /// Set cache directory
    #[must_use]
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Get default cache directory
    pub(crate) fn default_cache_dir() -> PathBuf {
        dirs::cache_dir().unwrap_or_else(|| PathBuf::from(".cache")).join("jsnli")
    }

    /// Cache key for a source URL
    pub(crate) fn archive_key(url: &str) -> String {
        let digest = Sha256::digest(url.as_bytes());
        digest.iter().take(8).map(|b| format!("{b:02x}")).collect()
    }

    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::info!(url, "downloading corpus archive");
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| JsnliError::HttpError { message: format!("Request failed: {e}") })?;

        let status = response.status();
        if !status.is_success() {
            return Err(JsnliError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        let mut file = std::fs::File::create(dest)?;
        response
            .copy_to(&mut file)
            .map_err(|e| JsnliError::HttpError { message: format!("Download failed: {e}") })?;
        Ok(())
    }
}

impl DownloadManager for HttpDownloadManager {
    fn download_and_extract(&self, url: &str) -> Result<PathBuf> {
        let key = Self::archive_key(url);
        let extract_dir = self.cache_dir.join(format!("extracted-{key}"));
        if extract_dir.is_dir() {
            tracing::debug!(path = %extract_dir.display(), "using cached extraction");
            return Ok(extract_dir);
        }

        std::fs::create_dir_all(&self.cache_dir)?;
        let archive_path = self.cache_dir.join(format!("{key}.zip"));
        if !archive_path.exists() {
            self.download(url, &archive_path)?;
        }

        extract_zip(&archive_path, &extract_dir)?;
        Ok(extract_dir)
    }
}
