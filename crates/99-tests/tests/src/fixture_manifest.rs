//! Golden manifest for the full fixture corpus.

use manifest_assembler::{assemble, GeneratorConfig};
use manifest_model::ModeTokens;
use pretty_assertions::assert_eq;
use testdata::Corpus;

const WALKED: &str = r#"{"age-test-roms/halt/halt-m0-interrupt-dmgC-cgbBCE.gb", NULL, NULL, COLOR, 1000, 0x40, NULL, 0},
{"age-test-roms/halt/halt-m0-interrupt-dmgC-cgbBCE.gb", NULL, NULL, MONOCHROME, 1000, 0x40, NULL, 0},
{"age-test-roms/ly/ly-ncmBC.gb", NULL, NULL, COLOR, 1000, 0x40, NULL, 0},
{"age-test-roms/m3-bg-bgp/m3-bg-bgp.gb", "age-test-roms/m3-bg-bgp/m3-bg-bgp-cgbBCE.png", NULL, COLOR, 0, 0x40, NULL, 0},
{"age-test-roms/m3-bg-bgp/m3-bg-bgp.gb", "age-test-roms/m3-bg-bgp/m3-bg-bgp-dmgC.png", NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"age-test-roms/m3-bg-bgp/m3-bg-bgp.gb", "age-test-roms/m3-bg-bgp/m3-bg-bgp-ncmBC.png", NULL, COLOR, 0, 0x40, NULL, 0},
{"age-test-roms/oam/oam-write-dmgC.gb", NULL, NULL, MONOCHROME, 1000, 0x40, NULL, 0},
{"blargg/cgb_sound/cgb_sound.gb", "blargg/cgb_sound/cgb_sound-cgb.png", NULL, COLOR, 37000, 0, NULL, 0},
{"blargg/cpu_instrs.gb", "blargg/cpu_instrs-dmg.png", NULL, MONOCHROME, 55000, 0, NULL, 0},
{"blargg/halt_bug.gb", "blargg/halt_bug-dmg-cgb.png", NULL, COLOR, 2000, 0, NULL, 0},
{"blargg/halt_bug.gb", "blargg/halt_bug-dmg-cgb.png", NULL, MONOCHROME, 2000, 0, NULL, 0},
{"blargg/oam_bug/oam_bug.gb", "blargg/oam_bug/oam_bug-cgb.png", NULL, COLOR, 21000, 0, NULL, 0},
{"blargg/oam_bug/oam_bug.gb", "blargg/oam_bug/oam_bug-dmg.png", NULL, MONOCHROME, 21000, 0, NULL, 0},
{"docboy-test-suite/cgb/hdma/hdma_basic.gb", "docboy-test-suite/cgb/success.png", NULL, COLOR, 380, 0, NULL, 0},
{"docboy-test-suite/common/boot/boot_regs.gb", "docboy-test-suite/common/success.png", NULL, COLOR, 380, 0, NULL, 0},
{"docboy-test-suite/common/boot/boot_regs.gb", "docboy-test-suite/common/success.png", NULL, MONOCHROME, 380, 0, NULL, 0},
{"docboy-test-suite/dmg/flat_rom.gb", "docboy-test-suite/success.png", NULL, MONOCHROME, 380, 0, NULL, 0},
{"docboy-test-suite/dmg/mbc3/rtc_tick_disabled_after_1s.gb", "docboy-test-suite/dmg/success.png", NULL, MONOCHROME, 4096, 0, NULL, 0},
{"docboy-test-suite/dmg/ppu/oam_scan.gb", "docboy-test-suite/dmg/success.png", NULL, MONOCHROME, 380, 0, NULL, 0},
{"docboy-test-suite/dmg/ppu/sub/deep_rom.gb", "docboy-test-suite/dmg/ppu/success.png", NULL, MONOCHROME, 380, 0, NULL, 0},
{"gbmicrotest/000-write_to_x8000.gb", NULL, NULL, MONOCHROME, 32, 0, NULL, 1},
{"gbmicrotest/is_if_set_during_ime0.gb", NULL, NULL, MONOCHROME, 380, 0, NULL, 1},
{"mealybug-tearoom-tests/dma/hdma_during_halt-C.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"mealybug-tearoom-tests/mbc/mbc3_rtc.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"mealybug-tearoom-tests/mbc/mbc3_rtc.gb", NULL, NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"mealybug-tearoom-tests/ppu/m3_bgp_change.gb", "mealybug-tearoom-tests/ppu/m3_bgp_change_cgb_c.png", NULL, COLOR, 0, 0x40, NULL, 0},
{"mealybug-tearoom-tests/ppu/m3_bgp_change.gb", "mealybug-tearoom-tests/ppu/m3_bgp_change_dmg_blob.png", NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"mealybug-tearoom-tests/ppu/m3_lcdc_win_en_change_multiple.gb", "mealybug-tearoom-tests/ppu/m3_lcdc_win_en_change_multiple_cgb_c.png", NULL, COLOR, 0, 0x40, NULL, 0},
{"mooneye-test-suite-wilbertpol/acceptance/gpu/hblank_ly_scx_timing-C.gb", NULL, NULL, COLOR, 0, 0xED, NULL, 0},
{"mooneye-test-suite-wilbertpol/acceptance/gpu/intr_1_2_timing-GS.gb", NULL, NULL, MONOCHROME, 0, 0xED, NULL, 0},
{"mooneye-test-suite-wilbertpol/acceptance/timer/timer_if.gb", NULL, NULL, COLOR, 0, 0xED, NULL, 0},
{"mooneye-test-suite-wilbertpol/acceptance/timer/timer_if.gb", NULL, NULL, MONOCHROME, 0, 0xED, NULL, 0},
{"mooneye-test-suite/acceptance/boot_regs-cgb.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"mooneye-test-suite/acceptance/boot_regs-dmgABC.gb", NULL, NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"mooneye-test-suite/acceptance/ei_sequence.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"mooneye-test-suite/acceptance/ei_sequence.gb", NULL, NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"mooneye-test-suite/acceptance/halt_ime1_timing.gbc", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"mooneye-test-suite/acceptance/halt_ime1_timing.gbc", NULL, NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"mooneye-test-suite/acceptance/ppu/hblank_ly_scx_timing-GS.gb", NULL, NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"mooneye-test-suite/acceptance/timer/tim00.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"mooneye-test-suite/acceptance/timer/tim00.gb", NULL, NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"mooneye-test-suite/emulator-only/mbc1/bits_bank1.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"mooneye-test-suite/emulator-only/mbc1/bits_bank1.gb", NULL, NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"mooneye-test-suite/manual-only/sprite_priority.gb", "mooneye-test-suite/manual-only/sprite_priority-cgb.png", NULL, COLOR, 0, 0x40, NULL, 0},
{"mooneye-test-suite/manual-only/sprite_priority.gb", "mooneye-test-suite/manual-only/sprite_priority-dmg.png", NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"same-suite/apu/channel_3/channel_3_wave_ram_locked_write.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"same-suite/apu/div_write_trigger.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"same-suite/apu/div_write_trigger.gb", NULL, NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"same-suite/dma/gbc_dma_cont.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"same-suite/interrupt/ei_delay_halt.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
{"same-suite/interrupt/ei_delay_halt.gb", NULL, NULL, MONOCHROME, 0, 0x40, NULL, 0},
{"same-suite/ppu/blocking_bgpi_increase.gb", NULL, NULL, COLOR, 0, 0x40, NULL, 0},
"#;

fn walked_only() -> GeneratorConfig {
    GeneratorConfig {
        hand_authored: false,
        ..GeneratorConfig::default()
    }
}

#[test]
fn fixture_corpus_renders_golden_manifest() {
    crate::init_logging();
    let corpus = Corpus::materialize().expect("materialize fixture corpus");

    let (manifest, _) = assemble(corpus.root(), &walked_only()).expect("assemble");

    assert_eq!(manifest.render(ModeTokens::Generic), WALKED);
}

#[test]
fn per_suite_counts_follow_registry_order() {
    crate::init_logging();
    let corpus = Corpus::materialize().expect("materialize fixture corpus");

    let (_, summaries) = assemble(corpus.root(), &walked_only()).expect("assemble");
    let counts: Vec<(&str, usize)> = summaries
        .iter()
        .map(|s| (s.dir.as_str(), s.records))
        .collect();

    assert_eq!(
        counts,
        vec![
            ("blargg", 6),
            ("age-test-roms", 7),
            ("mooneye-test-suite", 13),
            ("mooneye-test-suite-wilbertpol", 4),
            ("mealybug-tearoom-tests", 6),
            ("same-suite", 7),
            ("gbmicrotest", 2),
            ("docboy-test-suite", 7),
        ]
    );
}

#[test]
fn hand_authored_records_join_the_sort() {
    crate::init_logging();
    let corpus = Corpus::materialize().expect("materialize fixture corpus");

    let (manifest, _) = assemble(corpus.root(), &GeneratorConfig::default()).expect("assemble");
    let lines = manifest.sorted_lines(ModeTokens::Generic);

    assert_eq!(lines.len(), WALKED.lines().count() + suites::hand_authored().len());
    assert_eq!(
        lines.first().map(String::as_str),
        Some(
            "{\"age-test-roms/halt/halt-m0-interrupt-dmgC-cgbBCE.gb\", NULL, NULL, COLOR, 1000, 0x40, NULL, 0},\n"
        )
    );
    assert_eq!(
        lines.last().map(String::as_str),
        Some(
            "{\"strikethrough/strikethrough.gb\", \"strikethrough/strikethrough-dmg.png\", NULL, MONOCHROME, 500, 0, NULL, 0},\n"
        )
    );
    let acid = lines.iter().filter(|l| l.contains("-acid")).count();
    assert_eq!(acid, 4);
}
