//! Core type definitions for fixture corpus metadata.

/// What a fixture file stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A `.gb` or `.gbc` test ROM.
    Rom,
    /// A `.png` reference screenshot.
    ReferenceImage,
    /// Anything else shipped alongside the ROMs (readmes, sources).
    Other,
}

/// Describes a single file of the fixture corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureFile {
    /// Top-level directory the file belongs to.
    pub suite: &'static str,
    /// Normalized path relative to the corpus root.
    pub path: &'static str,
    /// Classification by extension.
    pub kind: FileKind,
}
