//! Corpus traversal: finds ROM files under a suite directory and turns them
//! into manifest records through a [`SuiteHandler`].

mod error;
mod glob;
mod handler;
mod path;
mod rom;
mod walk;

pub use error::{CorpusError, CorpusResult};
pub use glob::{glob_siblings, NameGlob};
pub use handler::SuiteHandler;
pub use path::corpus_relative;
pub use rom::RomFile;
pub use walk::{rom_files, walk, ROM_EXTENSIONS};
