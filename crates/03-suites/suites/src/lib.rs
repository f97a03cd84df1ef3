//! Classification rules for the conformance ROM suites the runner schedules.
//!
//! Each suite family is one [`SuiteFamily`] variant. Families encode their
//! suite's naming conventions literally: the filename suffixes are several
//! independent, sometimes overlapping conventions rather than one grammar, so
//! every family keeps its own pattern table.

mod acceptance;
mod combined;
mod family;
mod hand_authored;
mod microbench;
mod ppu_timing;
mod region_coded;
mod simple_timing;
mod success_screenshot;

pub use family::SuiteFamily;
pub use hand_authored::{
    acid_tests, button_stress_tests, hand_authored, rtc_tests, strikethrough_tests,
    trivial_render_tests, window_sync_tests,
};

/// `LD B,B`, the software breakpoint most suites execute when done.
pub const SIGNATURE_LD_B_B: u8 = 0x40;

/// Illegal opcode the wilbertpol fork of the acceptance suite halts on.
pub const SIGNATURE_ILLEGAL_ED: u8 = 0xED;
