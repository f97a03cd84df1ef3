//! Fixture corpus for manifest generator tests.
//!
//! The file list lives in `corpus.index.toml` and is compiled in by the
//! build script. [`Corpus`] writes it out as empty files under a temporary
//! directory so walkers see a real tree.

mod types;

pub use types::{FileKind, FixtureFile};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/generated.rs"));
}

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use tempfile::TempDir;

static BY_PATH: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    generated::FILES
        .iter()
        .enumerate()
        .map(|(idx, meta)| (meta.path, idx))
        .collect()
});

static SUITES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    generated::FILES
        .iter()
        .map(|meta| meta.suite)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
});

/// Returns every fixture file in index order.
pub fn list() -> &'static [FixtureFile] {
    generated::FILES
}

/// Top-level suite directories present in the fixture, sorted.
pub fn suites() -> &'static [&'static str] {
    &SUITES
}

/// Looks up fixture metadata by normalized path.
pub fn metadata(path: &str) -> Option<&'static FixtureFile> {
    BY_PATH.get(path).map(|&idx| &generated::FILES[idx])
}

/// A materialised copy of the fixture corpus.
///
/// The directory is removed when the value is dropped.
pub struct Corpus {
    dir: TempDir,
}

impl Corpus {
    /// Writes every fixture file.
    pub fn materialize() -> io::Result<Self> {
        Self::materialize_where(|_| true)
    }

    /// Writes only the files of the named suites.
    pub fn with_suites(suites: &[&str]) -> io::Result<Self> {
        Self::materialize_where(|meta| suites.contains(&meta.suite))
    }

    /// Creates an empty corpus root for tests that build their own tree.
    pub fn empty() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    fn materialize_where(keep: impl Fn(&FixtureFile) -> bool) -> io::Result<Self> {
        let corpus = Self::empty()?;
        for meta in list().iter().filter(|meta| keep(meta)) {
            corpus.add(meta.path)?;
        }
        Ok(corpus)
    }

    /// Corpus root directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Adds an extra empty file at `path`, creating parent directories.
    pub fn add(&self, path: &str) -> io::Result<()> {
        let dest = self.dir.path().join(path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, b"")
    }
}
