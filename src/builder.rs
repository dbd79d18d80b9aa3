//! Declarative corpus builder
//!
//! Ties the named configurations, the static metadata, and the split
//! files together: given the base directory of the extracted archive, it
//! resolves one TSV path per split and hands each to the record reader.

use std::path::Path;

use crate::config::{JsnliConfig, Version, CORPUS_VERSION};
use crate::dataset::{Dataset, DatasetDict, Split, SplitGenerator, TsvRecords};
use crate::error::Result;
use crate::fetcher::{DownloadManager, HttpDownloadManager};
use crate::info::DatasetInfo;

/// Fixed source URL for the corpus archive
pub const SOURCE_URL: &str = "https://nlp.ist.i.kyoto-u.ac.jp/DLcounter/lime.cgi?down=https://nlp.ist.i.kyoto-u.ac.jp/nl-resource/JSNLI/jsnli_1.1.zip&name=JSNLI.zip";

/// Validation file name, shared by both configurations
const DEV_FILE: &str = "dev.tsv";

/// Corpus loader for one named configuration
#[derive(Debug)]
pub struct JsnliBuilder {
    config: JsnliConfig,
}

impl JsnliBuilder {
    /// Corpus version
    pub const VERSION: Version = CORPUS_VERSION;

    /// Create a builder for a configuration
    #[must_use]
    pub fn new(config: JsnliConfig) -> Self {
        Self { config }
    }

    /// Create a builder by configuration name
    ///
    /// # Errors
    ///
    /// Returns [`crate::JsnliError::UnknownConfig`] for unrecognized names.
    pub fn from_config_name(name: &str) -> Result<Self> {
        Ok(Self::new(JsnliConfig::from_name(name)?))
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> JsnliConfig {
        self.config
    }

    /// Static dataset metadata and record schema
    #[must_use]
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo::jsnli()
    }

    /// Version-qualified directory name inside the archive
    #[must_use]
    pub fn archive_dir() -> String {
        format!("jsnli_{}.{}", Self::VERSION.major, Self::VERSION.minor)
    }

    /// Resolve the split files under an extracted-archive base directory
    ///
    /// Always yields TRAIN then VALIDATION; the training path depends on
    /// the active configuration, the validation path is `dev.tsv`.
    #[must_use]
    pub fn split_generators(&self, base_dir: &Path) -> Vec<SplitGenerator> {
        let corpus_dir = base_dir.join(Self::archive_dir());
        vec![
            SplitGenerator::new(Split::Train, corpus_dir.join(self.config.train_file())),
            SplitGenerator::new(Split::Validation, corpus_dir.join(DEV_FILE)),
        ]
    }

    /// Open the lazy record sequence for one split file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    pub fn generate_examples(tsv_path: &Path) -> Result<TsvRecords> {
        TsvRecords::open(tsv_path)
    }

    /// Read both splits into memory from an extracted-archive directory
    ///
    /// # Errors
    ///
    /// Propagates the first missing-file or malformed-line error.
    pub fn load_from_dir(&self, base_dir: &Path) -> Result<DatasetDict> {
        let generators = self.split_generators(base_dir);
        let train = self.realize(&generators[0])?;
        let validation = self.realize(&generators[1])?;
        Ok(DatasetDict { train, validation })
    }

    /// Download (or reuse) the archive via `manager`, then load both splits
    ///
    /// # Errors
    ///
    /// Propagates download, extraction, and read errors unmodified.
    pub fn load_with(&self, manager: &dyn DownloadManager) -> Result<DatasetDict> {
        let base_dir = manager.download_and_extract(SOURCE_URL)?;
        self.load_from_dir(&base_dir)
    }

    /// Load end-to-end with the default HTTP download manager
    ///
    /// # Errors
    ///
    /// Propagates download, extraction, and read errors unmodified.
    pub fn load(&self) -> Result<DatasetDict> {
        self.load_with(&HttpDownloadManager::new()?)
    }

    fn realize(&self, generator: &SplitGenerator) -> Result<Dataset> {
        let dataset = Dataset::from_tsv(self.config.name(), generator.split, &generator.tsv_path)?;
        tracing::info!(
            config = self.config.name(),
            split = %generator.split,
            rows = dataset.len(),
            "loaded split"
        );
        Ok(dataset)
    }
}

impl Default for JsnliBuilder {
    fn default() -> Self {
        Self::new(JsnliConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_archive_dir_is_version_qualified() {
        assert_eq!(JsnliBuilder::archive_dir(), "jsnli_1.1");
    }

    #[test]
    fn test_source_url_names_the_archive() {
        assert!(SOURCE_URL.contains("jsnli_1.1.zip"));
    }

    #[test]
    fn test_split_generators_with_filtering() {
        let builder = JsnliBuilder::new(JsnliConfig::WithFiltering);
        let generators = builder.split_generators(Path::new("/corpus"));

        assert_eq!(generators.len(), 2);
        assert_eq!(generators[0].split, Split::Train);
        assert_eq!(generators[0].tsv_path, PathBuf::from("/corpus/jsnli_1.1/train_w_filtering.tsv"));
        assert_eq!(generators[1].split, Split::Validation);
        assert_eq!(generators[1].tsv_path, PathBuf::from("/corpus/jsnli_1.1/dev.tsv"));
    }

    #[test]
    fn test_split_generators_without_filtering() {
        let builder = JsnliBuilder::new(JsnliConfig::WithoutFiltering);
        let generators = builder.split_generators(Path::new("/corpus"));

        assert_eq!(generators[0].tsv_path, PathBuf::from("/corpus/jsnli_1.1/train_wo_filtering.tsv"));
        // validation file is shared across configurations
        assert_eq!(generators[1].tsv_path, PathBuf::from("/corpus/jsnli_1.1/dev.tsv"));
    }

    #[test]
    fn test_from_config_name_rejects_unknown() {
        let err = JsnliBuilder::from_config_name("filtered").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_default_builder_config() {
        assert_eq!(JsnliBuilder::default().config(), JsnliConfig::WithFiltering);
    }

    #[test]
    fn test_info_exposes_schema() {
        let builder = JsnliBuilder::default();
        assert_eq!(builder.info().license, "CC BY-SA 4.0");
    }
}
