//! AGE test ROMs: screenshots and filenames carry a `-<model>...C` region code.
//!
//! `dmg` codes select monochrome; `cgb` and `ncm` (color hardware running a
//! monochrome cart) select color.

use std::path::PathBuf;

use corpus::{glob_siblings, CorpusResult, RomFile};
use manifest_model::{ManifestRecord, Mode};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::SIGNATURE_LD_B_B;

/// Run time for ROMs judged by machine state.
pub(crate) const INTERNAL_STATE_RUN_MS: u32 = 1000;

struct Patterns {
    dmg: Regex,
    cgb: Regex,
    ncm: Regex,
}

static PATTERNS: Lazy<Patterns> = Lazy::new(|| Patterns {
    dmg: Regex::new(r"^.*-dmg.*C.*.gb$").expect("valid regex"),
    cgb: Regex::new(r"^.*-cgb.*C.*.gb$").expect("valid regex"),
    ncm: Regex::new(r"^.*-ncm.*C.*.gb$").expect("valid regex"),
});

pub(crate) fn locate(mode: Mode, rom: &RomFile) -> CorpusResult<Vec<PathBuf>> {
    let dir = rom.dir();
    let stem = rom.stem();
    match mode {
        Mode::Monochrome => glob_siblings(dir, &format!("{stem}-dmg*C*.png")),
        Mode::Color => {
            let mut found = glob_siblings(dir, &format!("{stem}-cgb*C*.png"))?;
            found.extend(glob_siblings(dir, &format!("{stem}-ncm*C*.png"))?);
            Ok(found)
        }
    }
}

pub(crate) fn screenshot(mode: Mode, rom: &RomFile, image: &str) -> ManifestRecord {
    ManifestRecord::screenshot(&rom.rom_path, image, mode, 0).with_signature(SIGNATURE_LD_B_B)
}

pub(crate) fn classify(rom: &RomFile) -> Vec<ManifestRecord> {
    let name = rom.file_name();
    let mut modes = Vec::new();
    if PATTERNS.dmg.is_match(name) {
        modes.push(Mode::Monochrome);
    }
    if PATTERNS.cgb.is_match(name) {
        modes.push(Mode::Color);
    }
    if PATTERNS.ncm.is_match(name) {
        modes.push(Mode::Color);
    }
    modes
        .into_iter()
        .map(|mode| {
            ManifestRecord::internal_state(&rom.rom_path, mode, INTERNAL_STATE_RUN_MS)
                .with_signature(SIGNATURE_LD_B_B)
        })
        .collect()
}
