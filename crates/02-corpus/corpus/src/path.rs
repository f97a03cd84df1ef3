//! Corpus-relative ROM identifiers.

use std::path::{Component, Path};

use crate::{CorpusError, CorpusResult};

/// Strips `root` from `full` and joins the remaining components with `/`.
///
/// The result never starts with a separator and uses `/` on every host. Fails
/// when `root` is not a prefix of `full`.
pub fn corpus_relative(full: &Path, root: &Path) -> CorpusResult<String> {
    let rest = full
        .strip_prefix(root)
        .map_err(|_| CorpusError::OutsideRoot {
            path: full.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    let mut out = String::new();
    for component in rest.components() {
        let Component::Normal(part) = component else {
            continue;
        };
        let part = part
            .to_str()
            .ok_or_else(|| CorpusError::NonUtf8(full.to_path_buf()))?;
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(part);
    }
    Ok(out)
}
