//! Lazy record reader for the corpus TSV files
//!
//! Column order is `label<TAB>premise<TAB>hypothesis`, no header row.
//! Lines are consumed in file order; the trailing newline is stripped
//! before the tab split.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{JsnliError, Result};

use super::example::NliExample;
use super::label::Label;

/// Forward-only iterator over the records of one split file
///
/// Yields `(id, record)` pairs where `id` is a contiguous zero-based
/// counter scoped to this file. The first malformed line or unknown label
/// yields an `Err` and ends iteration; there is no skip-and-continue.
/// Once consumed the sequence is not restartable, reopen the file instead.
#[derive(Debug)]
pub struct TsvRecords {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
    next_id: usize,
    failed: bool,
}

impl TsvRecords {
    /// Open a split file for sequential reading
    ///
    /// # Errors
    ///
    /// Returns [`JsnliError::SplitFileMissing`] if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(JsnliError::SplitFileMissing { path });
        }
        let file = File::open(&path)?;
        Ok(Self { lines: BufReader::new(file).lines(), path, next_id: 0, failed: false })
    }

    /// Path of the file being read
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_line(path: &Path, id: usize, line: &str) -> Result<NliExample> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 3 {
        return Err(JsnliError::MalformedLine {
            path: path.to_path_buf(),
            // 1-based for error messages
            line: id + 1,
            fields: fields.len(),
        });
    }
    let label: Label = fields[0].parse()?;
    Ok(NliExample::new(fields[1], fields[2], label))
}

impl Iterator for TsvRecords {
    type Item = Result<(usize, NliExample)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => {
                self.failed = true;
                return Some(Err(e.into()));
            }
        };
        let id = self.next_id;
        match parse_line(&self.path, id, &line) {
            Ok(example) => {
                self.next_id += 1;
                Some(Ok((id, example)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
