//! Realized in-memory splits

use std::path::Path;

use crate::error::Result;

use super::example::NliExample;
use super::reader::TsvRecords;
use super::split::Split;

/// One fully read split
#[derive(Debug)]
pub struct Dataset {
    /// Configuration name this split was read under
    name: String,
    /// Which split this is
    split: Split,
    /// Records in file order
    examples: Vec<NliExample>,
    /// Current position for iteration
    position: usize,
}

impl Dataset {
    /// Create a dataset from already-read records
    #[must_use]
    pub fn new(name: impl Into<String>, split: Split, examples: Vec<NliExample>) -> Self {
        Self { name: name.into(), split, examples, position: 0 }
    }

    /// Read a whole split file into memory
    ///
    /// # Errors
    ///
    /// Propagates the first reader error unmodified; a malformed line
    /// anywhere in the file fails the whole split.
    pub fn from_tsv(name: impl Into<String>, split: Split, path: &Path) -> Result<Self> {
        let mut examples = Vec::new();
        for record in TsvRecords::open(path)? {
            let (_, example) = record?;
            examples.push(example);
        }
        Ok(Self::new(name, split, examples))
    }

    /// Configuration name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Split identity
    #[must_use]
    pub fn split(&self) -> Split {
        self.split
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Get record by id
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&NliExample> {
        self.examples.get(id)
    }

    /// All records
    #[must_use]
    pub fn examples(&self) -> &[NliExample] {
        &self.examples
    }

    /// Per-class record counts, indexed by class id
    #[must_use]
    pub fn label_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for example in &self.examples {
            counts[example.label.id()] += 1;
        }
        counts
    }

    /// Reset iteration position
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl Iterator for Dataset {
    type Item = NliExample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position < self.examples.len() {
            let example = self.examples[self.position].clone();
            self.position += 1;
            Some(example)
        } else {
            None
        }
    }
}

/// Both splits of one configuration
#[derive(Debug)]
pub struct DatasetDict {
    /// Training split
    pub train: Dataset,
    /// Validation split
    pub validation: Dataset,
}

impl DatasetDict {
    /// Get a split by identity
    #[must_use]
    pub fn get(&self, split: Split) -> &Dataset {
        match split {
            Split::Train => &self.train,
            Split::Validation => &self.validation,
        }
    }
}
