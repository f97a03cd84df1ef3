use std::path::PathBuf;

use manifest_model::{ManifestRecord, Mode};

use crate::{CorpusResult, RomFile};

/// Per-suite classification policy driven by [`crate::walk`].
///
/// A suite may define a reference locator, a filename classifier, both, or
/// neither. When it defines both, the classifier only runs for ROMs that have
/// no reference candidate in either mode.
pub trait SuiteHandler {
    /// Whether [`SuiteHandler::locate_references`] is meaningful for this suite.
    fn has_locator(&self) -> bool;

    /// Candidate reference screenshots for `rom` under `mode`, as paths on disk.
    fn locate_references(&self, mode: Mode, rom: &RomFile) -> CorpusResult<Vec<PathBuf>>;

    /// Builds the record for one discovered screenshot. `None` drops it.
    fn screenshot_record(&self, mode: Mode, rom: &RomFile, image: &str) -> Option<ManifestRecord>;

    /// Internal-state records decided from the path alone. `None` means the
    /// suite has no classifier.
    fn classify_by_filename(&self, rom: &RomFile) -> Option<Vec<ManifestRecord>>;
}
