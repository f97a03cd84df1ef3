use std::io;
use std::path::PathBuf;

use corpus::CorpusError;
use thiserror::Error;

pub type AssembleResult<T> = Result<T, AssembleError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid suite registration {dir:?}: {reason}")]
    InvalidSuite { dir: String, reason: &'static str },
}

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("corpus root {path:?} is not readable: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("suite {suite:?} failed: {source}")]
    Suite {
        suite: String,
        #[source]
        source: CorpusError,
    },

    #[error("failed to write manifest {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
