//! Mooneye acceptance ROMs and the wilbertpol fork.
//!
//! Filenames end in a model suffix. Only DMG-CPU-C and CGB-CPU-C class
//! hardware is targeted, so ROMs pinned to other revisions (SGB, MGB, AGB,
//! early DMG0/CGB0 silicon) are dropped. Names without a recognised suffix
//! run under both modes.

use corpus::RomFile;
use manifest_model::{ManifestRecord, Mode};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{SIGNATURE_ILLEGAL_ED, SIGNATURE_LD_B_B};

/// Subtrees holding helpers or stress ROMs rather than tests.
const EXCLUDED_SEGMENTS: [&str; 2] = ["madness", "utils"];

/// The only subtrees of the wilbertpol fork worth scheduling.
const VARIANT_SUBTREES: [&str; 2] = ["acceptance/gpu", "timer/timer_if"];

struct Patterns {
    foreign_model: Regex,
    color: Regex,
    monochrome: Regex,
}

static PATTERNS: Lazy<Patterns> = Lazy::new(|| Patterns {
    foreign_model: Regex::new(r"^.*(?:-S|-A|-dmg0|-mgb|-sgb|-sgb2|-cgb0)\.gb$")
        .expect("valid regex"),
    color: Regex::new(r"^.*(?:-C|-cgb.*C.*|-cgb)\.gb$").expect("valid regex"),
    monochrome: Regex::new(r"^.*(?:-G.*|-dmg.*C.*)\.gb$").expect("valid regex"),
});

/// Modes a ROM name applies to. Empty when the ROM targets other hardware.
///
/// A name matching both the color and the monochrome suffix yields both.
pub(crate) fn modes_for(file_name: &str) -> Vec<Mode> {
    if PATTERNS.foreign_model.is_match(file_name) {
        return Vec::new();
    }
    let mut modes = Vec::new();
    if PATTERNS.color.is_match(file_name) {
        modes.push(Mode::Color);
    }
    if PATTERNS.monochrome.is_match(file_name) {
        modes.push(Mode::Monochrome);
    }
    if modes.is_empty() {
        modes.extend(Mode::ALL);
    }
    modes
}

fn records(rom: &RomFile, signature: u8) -> Vec<ManifestRecord> {
    modes_for(rom.file_name())
        .into_iter()
        .map(|mode| ManifestRecord::internal_state(&rom.rom_path, mode, 0).with_signature(signature))
        .collect()
}

pub(crate) fn screenshot(mode: Mode, rom: &RomFile, image: &str) -> ManifestRecord {
    ManifestRecord::screenshot(&rom.rom_path, image, mode, 0).with_signature(SIGNATURE_LD_B_B)
}

pub(crate) fn classify(rom: &RomFile) -> Vec<ManifestRecord> {
    if EXCLUDED_SEGMENTS
        .iter()
        .any(|segment| rom.suite_path.contains(segment))
    {
        return Vec::new();
    }
    records(rom, SIGNATURE_LD_B_B)
}

pub(crate) fn classify_variant(rom: &RomFile) -> Vec<ManifestRecord> {
    if !VARIANT_SUBTREES
        .iter()
        .any(|subtree| rom.suite_path.contains(subtree))
    {
        return Vec::new();
    }
    records(rom, SIGNATURE_ILLEGAL_ED)
}
