use std::fmt;
use std::path::PathBuf;

use corpus::{CorpusResult, RomFile, SuiteHandler};
use manifest_model::{ManifestRecord, Mode};
use serde::{Deserialize, Serialize};

use crate::{
    acceptance, combined, microbench, ppu_timing, region_coded, simple_timing, success_screenshot,
};

/// Closed set of suite classification strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuiteFamily {
    /// Blargg: screenshot only, per-ROM run time table.
    SimpleTiming,
    /// AGE: region-coded screenshots with a suffix fallback.
    RegionCoded,
    /// Mooneye: blargg-style screenshots, model-suffix fallback.
    HardwareAcceptance,
    /// Mooneye (wilbertpol fork): model-suffix rules on two subtrees only.
    HardwareAcceptanceVariant,
    /// Mealybug Tearoom: blob-tagged screenshots, both-mode fallback.
    PpuTiming,
    /// SameSuite: per-subtree mode restrictions.
    Combined,
    /// gbmicrotest: monochrome, strict exit.
    Microbenchmark,
    /// docboy: shared `success.png` two levels above each ROM.
    SuccessScreenshot,
}

impl SuiteFamily {
    pub const ALL: [SuiteFamily; 8] = [
        SuiteFamily::SimpleTiming,
        SuiteFamily::RegionCoded,
        SuiteFamily::HardwareAcceptance,
        SuiteFamily::HardwareAcceptanceVariant,
        SuiteFamily::PpuTiming,
        SuiteFamily::Combined,
        SuiteFamily::Microbenchmark,
        SuiteFamily::SuccessScreenshot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SuiteFamily::SimpleTiming => "simple-timing",
            SuiteFamily::RegionCoded => "region-coded",
            SuiteFamily::HardwareAcceptance => "hardware-acceptance",
            SuiteFamily::HardwareAcceptanceVariant => "hardware-acceptance-variant",
            SuiteFamily::PpuTiming => "ppu-timing",
            SuiteFamily::Combined => "combined",
            SuiteFamily::Microbenchmark => "microbenchmark",
            SuiteFamily::SuccessScreenshot => "success-screenshot",
        }
    }
}

impl fmt::Display for SuiteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl SuiteHandler for SuiteFamily {
    fn has_locator(&self) -> bool {
        match self {
            SuiteFamily::SimpleTiming
            | SuiteFamily::RegionCoded
            | SuiteFamily::HardwareAcceptance
            | SuiteFamily::PpuTiming
            | SuiteFamily::SuccessScreenshot => true,
            SuiteFamily::HardwareAcceptanceVariant
            | SuiteFamily::Combined
            | SuiteFamily::Microbenchmark => false,
        }
    }

    fn locate_references(&self, mode: Mode, rom: &RomFile) -> CorpusResult<Vec<PathBuf>> {
        match self {
            SuiteFamily::SimpleTiming | SuiteFamily::HardwareAcceptance => {
                simple_timing::locate(mode, rom)
            }
            SuiteFamily::RegionCoded => region_coded::locate(mode, rom),
            SuiteFamily::PpuTiming => ppu_timing::locate(mode, rom),
            SuiteFamily::SuccessScreenshot => Ok(success_screenshot::locate(rom)),
            SuiteFamily::HardwareAcceptanceVariant
            | SuiteFamily::Combined
            | SuiteFamily::Microbenchmark => Ok(Vec::new()),
        }
    }

    fn screenshot_record(&self, mode: Mode, rom: &RomFile, image: &str) -> Option<ManifestRecord> {
        match self {
            SuiteFamily::SimpleTiming => simple_timing::screenshot(mode, rom, image),
            SuiteFamily::RegionCoded => Some(region_coded::screenshot(mode, rom, image)),
            SuiteFamily::HardwareAcceptance => Some(acceptance::screenshot(mode, rom, image)),
            SuiteFamily::PpuTiming => Some(ppu_timing::screenshot(mode, rom, image)),
            SuiteFamily::SuccessScreenshot => success_screenshot::screenshot(mode, rom, image),
            SuiteFamily::HardwareAcceptanceVariant
            | SuiteFamily::Combined
            | SuiteFamily::Microbenchmark => None,
        }
    }

    fn classify_by_filename(&self, rom: &RomFile) -> Option<Vec<ManifestRecord>> {
        match self {
            SuiteFamily::SimpleTiming | SuiteFamily::SuccessScreenshot => None,
            SuiteFamily::RegionCoded => Some(region_coded::classify(rom)),
            SuiteFamily::HardwareAcceptance => Some(acceptance::classify(rom)),
            SuiteFamily::HardwareAcceptanceVariant => Some(acceptance::classify_variant(rom)),
            SuiteFamily::PpuTiming => Some(ppu_timing::classify(rom)),
            SuiteFamily::Combined => Some(combined::classify(rom)),
            SuiteFamily::Microbenchmark => Some(microbench::classify(rom)),
        }
    }
}
