//! Runs every registered suite over a corpus and produces the sorted manifest.

mod assemble;
mod config;
mod error;

pub use assemble::{assemble, generate, SuiteSummary};
pub use config::{GeneratorConfig, SuiteRegistration, DEFAULT_OUTPUT};
pub use error::{AssembleError, AssembleResult, ConfigError};
