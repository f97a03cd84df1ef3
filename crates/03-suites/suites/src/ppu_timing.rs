//! Mealybug Tearoom PPU timing ROMs.
//!
//! References are named `<stem>_dmg_blob*.png` and `<stem>_cgb_c*.png`
//! after the hardware revision they were captured on.

use std::path::PathBuf;

use corpus::{glob_siblings, CorpusResult, RomFile};
use manifest_model::{ManifestRecord, Mode};

use crate::SIGNATURE_LD_B_B;

fn blob_tag(mode: Mode) -> &'static str {
    match mode {
        Mode::Monochrome => "dmg_blob",
        Mode::Color => "cgb_c",
    }
}

pub(crate) fn locate(mode: Mode, rom: &RomFile) -> CorpusResult<Vec<PathBuf>> {
    glob_siblings(rom.dir(), &format!("{}_{}*.png", rom.stem(), blob_tag(mode)))
}

pub(crate) fn screenshot(mode: Mode, rom: &RomFile, image: &str) -> ManifestRecord {
    ManifestRecord::screenshot(&rom.rom_path, image, mode, 0).with_signature(SIGNATURE_LD_B_B)
}

pub(crate) fn classify(rom: &RomFile) -> Vec<ManifestRecord> {
    // HDMA only exists on color hardware.
    let modes: &[Mode] = if rom.suite_path.contains("dma/hdma") {
        &[Mode::Color]
    } else {
        &Mode::ALL
    };
    modes
        .iter()
        .map(|&mode| {
            ManifestRecord::internal_state(&rom.rom_path, mode, 0).with_signature(SIGNATURE_LD_B_B)
        })
        .collect()
}
