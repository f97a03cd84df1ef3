//! docboy test suite: every ROM ends on the same `success.png` frame.
//!
//! ROMs live under `dmg/` or `cgb/` and only run in the matching mode.

use std::path::PathBuf;

use corpus::RomFile;
use manifest_model::{ManifestRecord, Mode};

pub(crate) const SUCCESS_IMAGE: &str = "success.png";

const DEFAULT_RUN_MS: u32 = 380;
const RTC_RUN_MS: u32 = 4096;

/// MBC3 clock ROMs that wait for the RTC to tick.
const RTC_SUBTREES: [&str; 3] = [
    "mbc3/no_rtc",
    "mbc3/rtc_default_enabled",
    "mbc3/rtc_tick_disabled",
];

/// The shared reference two segments above the ROM, identical for both modes.
///
/// The file need not exist. ROMs directly in the suite directory have no such
/// location inside the suite and get no reference.
pub(crate) fn locate(rom: &RomFile) -> Vec<PathBuf> {
    if !rom.suite_path.contains('/') {
        return Vec::new();
    }
    rom.dir()
        .parent()
        .map(|dir| vec![dir.join(SUCCESS_IMAGE)])
        .unwrap_or_default()
}

fn runs_in(mode: Mode, suite_path: &str) -> bool {
    match suite_path.split('/').next() {
        Some("cgb") => mode == Mode::Color,
        Some("dmg") => mode == Mode::Monochrome,
        _ => true,
    }
}

pub(crate) fn run_duration_ms(rom: &RomFile) -> u32 {
    if RTC_SUBTREES.iter().any(|p| rom.suite_path.contains(p)) {
        RTC_RUN_MS
    } else {
        DEFAULT_RUN_MS
    }
}

pub(crate) fn screenshot(mode: Mode, rom: &RomFile, image: &str) -> Option<ManifestRecord> {
    if !runs_in(mode, &rom.suite_path) {
        return None;
    }
    Some(ManifestRecord::screenshot(
        &rom.rom_path,
        image,
        mode,
        run_duration_ms(rom),
    ))
}
