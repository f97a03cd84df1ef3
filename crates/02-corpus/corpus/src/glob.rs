//! Filename patterns used to discover reference screenshots next to a ROM.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::{CorpusError, CorpusResult};

/// A single-segment filename pattern where `*` matches any run of characters
/// and everything else is literal.
#[derive(Clone, Debug)]
pub struct NameGlob {
    regex: Regex,
}

impl NameGlob {
    pub fn new(pattern: &str) -> CorpusResult<Self> {
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^{body}$")).map_err(|source| CorpusError::Pattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Returns the files in `dir` whose names match `pattern`, sorted by path.
pub fn glob_siblings(dir: &Path, pattern: &str) -> CorpusResult<Vec<PathBuf>> {
    let glob = NameGlob::new(pattern)?;
    let entries = fs::read_dir(dir).map_err(|err| CorpusError::io(dir, err))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| CorpusError::io(dir, err))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if glob.matches(name) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
