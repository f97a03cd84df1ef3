//! Record types and the text format of the generated test manifest.
//!
//! A manifest is a flat list of [`ManifestRecord`]s, one per
//! (ROM, mode[, subtest]) case. The external test runner includes the rendered
//! file verbatim as a C array initializer, so the line shape produced by
//! [`ManifestRecord::render`] is a fixed contract.

mod manifest;
mod mode;
mod record;
mod script;

pub use manifest::Manifest;
pub use mode::{Mode, ModeTokens};
pub use record::ManifestRecord;
pub use script::{Button, InputScript, InputStep, ScriptError};
