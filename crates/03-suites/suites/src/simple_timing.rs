//! Blargg's test ROMs: judged by screenshot after a fixed per-ROM run time.
//!
//! Reference images sit next to the ROM and are named `<stem>*<tag>*.png`,
//! where the tag is the mode's three-letter code. The acceptance suite reuses
//! this convention.

use std::path::PathBuf;

use corpus::{glob_siblings, CorpusResult, RomFile};
use log::warn;
use manifest_model::{ManifestRecord, Mode};

pub(crate) fn locate(mode: Mode, rom: &RomFile) -> CorpusResult<Vec<PathBuf>> {
    glob_siblings(rom.dir(), &format!("{}*{}*.png", rom.stem(), mode.tag()))
}

/// Emulated milliseconds each ROM needs before its result screen is stable.
pub(crate) fn run_duration_ms(mode: Mode, file_name: &str) -> Option<u32> {
    let seconds = match (mode, file_name) {
        (Mode::Monochrome, "cpu_instrs.gb") => 55,
        (Mode::Monochrome, "dmg_sound.gb") => 36,
        (Mode::Color, "cgb_sound.gb") => 37,
        (Mode::Color, "cpu_instrs.gb") => 31,
        (_, "halt_bug.gb") => 2,
        (_, "instr_timing.gb") => 1,
        (_, "interrupt_time.gb") => 2,
        (_, "mem_timing.gb") => 4,
        (_, "oam_bug.gb") => 21,
        _ => return None,
    };
    Some(seconds * 1000)
}

pub(crate) fn screenshot(mode: Mode, rom: &RomFile, image: &str) -> Option<ManifestRecord> {
    let Some(duration) = run_duration_ms(mode, rom.file_name()) else {
        warn!(
            "{}: reference {image} has no {} run time, skipping",
            rom.rom_path,
            mode.tag()
        );
        return None;
    };
    Some(ManifestRecord::screenshot(&rom.rom_path, image, mode, duration))
}
