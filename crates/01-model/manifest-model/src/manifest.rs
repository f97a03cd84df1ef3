//! Ordered collection of records and the single write step.

use std::fs;
use std::io;
use std::path::Path;

use crate::{ManifestRecord, ModeTokens};

/// The full output of one generation pass.
///
/// Records are kept in insertion order until [`Manifest::render`], which orders
/// lines by their rendered text so the file never depends on directory
/// enumeration order. Duplicate records are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    records: Vec<ManifestRecord>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ManifestRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ManifestRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rendered lines in their final sorted order.
    pub fn sorted_lines(&self, tokens: ModeTokens) -> Vec<String> {
        let mut lines: Vec<String> = self.records.iter().map(|r| r.render(tokens)).collect();
        lines.sort();
        lines
    }

    /// The exact bytes [`Manifest::write`] puts on disk.
    pub fn render(&self, tokens: ModeTokens) -> String {
        self.sorted_lines(tokens).concat()
    }

    /// Overwrites `path` with the rendered manifest.
    pub fn write(&self, path: &Path, tokens: ModeTokens) -> io::Result<()> {
        fs::write(path, self.render(tokens))
    }
}

impl Extend<ManifestRecord> for Manifest {
    fn extend<T: IntoIterator<Item = ManifestRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl FromIterator<ManifestRecord> for Manifest {
    fn from_iter<T: IntoIterator<Item = ManifestRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
