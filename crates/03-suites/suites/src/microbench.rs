//! gbmicrotest: tiny monochrome ROMs that report through a fixed HRAM byte.

use corpus::RomFile;
use manifest_model::{ManifestRecord, Mode};

const DEFAULT_RUN_MS: u32 = 32;

/// ROMs that need longer than the default to settle.
const SLOW: [(&str, u32); 1] = [("is_if_set_during_ime0.gb", 380)];

pub(crate) fn run_duration_ms(rom: &RomFile) -> u32 {
    SLOW.iter()
        .find(|(name, _)| rom.rom_path.contains(name))
        .map_or(DEFAULT_RUN_MS, |&(_, ms)| ms)
}

pub(crate) fn classify(rom: &RomFile) -> Vec<ManifestRecord> {
    vec![
        ManifestRecord::internal_state(&rom.rom_path, Mode::Monochrome, run_duration_ms(rom))
            .with_strict_exit(),
    ]
}
