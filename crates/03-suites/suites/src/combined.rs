//! SameSuite: APU, DMA and PPU edge cases with per-subtree mode rules.
//!
//! Paths are matched relative to the suite root.

use corpus::RomFile;
use manifest_model::{ManifestRecord, Mode};

use crate::SIGNATURE_LD_B_B;

/// Square and noise channel ROMs fail on CGB-CPU-C silicon itself.
const UNSUPPORTED: [&str; 3] = ["apu/channel_1", "apu/channel_2", "apu/channel_4"];

/// APU ROMs written for early color revisions.
const EARLY_COLOR_REVISIONS: [&str; 2] = ["-cgb0", "-cgbB"];

pub(crate) fn modes_for(rom: &RomFile) -> Vec<Mode> {
    let path = rom.suite_path.as_str();
    if path.starts_with("sgb/") || UNSUPPORTED.iter().any(|p| path.contains(p)) {
        return Vec::new();
    }

    if path.starts_with("apu") {
        let name = rom.file_name();
        if EARLY_COLOR_REVISIONS.iter().any(|rev| name.contains(rev)) {
            return Vec::new();
        }
        let mut modes = Vec::with_capacity(2);
        if path.contains("apu/div_write_trigger") {
            modes.push(Mode::Monochrome);
        }
        modes.push(Mode::Color);
        return modes;
    }

    if path.starts_with("dma") || path.starts_with("ppu/blocking_bgpi_increase") {
        return vec![Mode::Color];
    }

    Mode::ALL.to_vec()
}

pub(crate) fn classify(rom: &RomFile) -> Vec<ManifestRecord> {
    modes_for(rom)
        .into_iter()
        .map(|mode| ManifestRecord::internal_state(&rom.rom_path, mode, 0).with_signature(SIGNATURE_LD_B_B))
        .collect()
}
