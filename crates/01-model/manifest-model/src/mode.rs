//! Hardware modes a ROM can be scheduled under.

use serde::{Deserialize, Serialize};

/// Hardware variant the emulator is started in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Original monochrome hardware (DMG).
    Monochrome,
    /// Color hardware (CGB).
    Color,
}

impl Mode {
    /// Both modes, monochrome first.
    pub const ALL: [Mode; 2] = [Mode::Monochrome, Mode::Color];

    /// Three-letter lowercase code used by reference-image filenames.
    pub fn tag(self) -> &'static str {
        match self {
            Mode::Monochrome => "dmg",
            Mode::Color => "cgb",
        }
    }
}

/// Spelling of the mode enumerator in the rendered manifest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeTokens {
    /// `MONOCHROME` / `COLOR`.
    #[default]
    Generic,
    /// `GBMULATOR_MODE_GB` / `GBMULATOR_MODE_GBC`, as compiled by the reference runner.
    Gbmulator,
}

impl ModeTokens {
    /// Returns the enumerator token for `mode`.
    pub fn token(self, mode: Mode) -> &'static str {
        match (self, mode) {
            (ModeTokens::Generic, Mode::Monochrome) => "MONOCHROME",
            (ModeTokens::Generic, Mode::Color) => "COLOR",
            (ModeTokens::Gbmulator, Mode::Monochrome) => "GBMULATOR_MODE_GB",
            (ModeTokens::Gbmulator, Mode::Color) => "GBMULATOR_MODE_GBC",
        }
    }
}
