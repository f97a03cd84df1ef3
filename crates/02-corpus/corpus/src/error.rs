use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type CorpusResult<T> = Result<T, CorpusError>;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("i/o error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path:?} is not below corpus root {root:?}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("path {0:?} is not valid UTF-8")]
    NonUtf8(PathBuf),

    #[error("invalid name pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl CorpusError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }
}
