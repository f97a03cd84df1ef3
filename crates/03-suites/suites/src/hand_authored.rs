//! Fixed records for suites too small or irregular for a rule set.

use manifest_model::{Button, InputScript, ManifestRecord, Mode};

use crate::SIGNATURE_LD_B_B;

/// Every hand-authored family, in registration order.
pub fn hand_authored() -> Vec<ManifestRecord> {
    let mut records = Vec::new();
    records.extend(trivial_render_tests());
    records.extend(acid_tests());
    records.extend(button_stress_tests());
    records.extend(rtc_tests());
    records.extend(strikethrough_tests());
    records.extend(window_sync_tests());
    records
}

/// cgb-acid-hell, cgb-acid2 and dmg-acid2.
pub fn acid_tests() -> Vec<ManifestRecord> {
    [
        (
            "cgb-acid-hell/cgb-acid-hell.gbc",
            "cgb-acid-hell/cgb-acid-hell.png",
            Mode::Color,
        ),
        ("cgb-acid2/cgb-acid2.gbc", "cgb-acid2/cgb-acid2.png", Mode::Color),
        ("dmg-acid2/dmg-acid2.gb", "dmg-acid2/dmg-acid2-dmg.png", Mode::Monochrome),
        ("dmg-acid2/dmg-acid2.gb", "dmg-acid2/dmg-acid2-cgb.png", Mode::Color),
    ]
    .into_iter()
    .map(|(rom, image, mode)| {
        ManifestRecord::screenshot(rom, image, mode, 0).with_signature(SIGNATURE_LD_B_B)
    })
    .collect()
}

/// rtc3test: one ROM, three menu-selected scenarios.
pub fn rtc_tests() -> Vec<ManifestRecord> {
    const ROM: &str = "rtc3test/rtc3test.gb";
    let scenarios = [
        ("basic-tests", 13_000, InputScript::press(1, Button::A)),
        (
            "range-tests",
            8_000,
            InputScript::press(1, Button::Down).then(1, Button::A),
        ),
        (
            "sub-second-writes",
            26_000,
            InputScript::press(1, Button::Down)
                .then(1, Button::Down)
                .then(1, Button::A),
        ),
    ];

    let mut records = Vec::with_capacity(scenarios.len() * 2);
    for (label, duration, script) in scenarios {
        for mode in Mode::ALL {
            let image = format!("rtc3test/rtc3test-{label}-{}.png", mode.tag());
            records.push(
                ManifestRecord::screenshot(ROM, image, mode, duration)
                    .with_subtest(label)
                    .with_input_script(script.clone()),
            );
        }
    }
    records
}

/// bully: the ROM only has to boot and draw.
pub fn trivial_render_tests() -> Vec<ManifestRecord> {
    Mode::ALL
        .into_iter()
        .map(|mode| ManifestRecord::screenshot("bully/bully.gb", "bully/bully.png", mode, 500))
        .collect()
}

/// little-things-gb: first-frame colour and a full button sweep.
pub fn button_stress_tests() -> Vec<ManifestRecord> {
    let sweep = InputScript::press(1, Button::Right)
        .then(1, Button::Left)
        .then(1, Button::Up)
        .then(1, Button::Down)
        .then(1, Button::A)
        .then(1, Button::B)
        .then(1, Button::Select)
        .then(1, Button::Start);

    let mut records = Vec::with_capacity(4);
    for mode in Mode::ALL {
        records.push(ManifestRecord::screenshot(
            "little-things-gb/firstwhite.gb",
            "little-things-gb/firstwhite-dmg-cgb.png",
            mode,
            500,
        ));
    }
    for mode in Mode::ALL {
        records.push(
            ManifestRecord::screenshot(
                "little-things-gb/tellinglys.gb",
                format!("little-things-gb/tellinglys-{}.png", mode.tag()),
                mode,
                5_000,
            )
            .with_input_script(sweep.clone()),
        );
    }
    records
}

pub fn strikethrough_tests() -> Vec<ManifestRecord> {
    Mode::ALL
        .into_iter()
        .map(|mode| {
            ManifestRecord::screenshot(
                "strikethrough/strikethrough.gb",
                format!("strikethrough/strikethrough-{}.png", mode.tag()),
                mode,
                500,
            )
        })
        .collect()
}

/// windesync-validate: window/LCD sync edge case, SGB capture used as reference.
pub fn window_sync_tests() -> Vec<ManifestRecord> {
    vec![ManifestRecord::screenshot(
        "other/windesync-validate/windesync-validate.gb",
        "other/windesync-validate/windesync-reference-sgb.png",
        Mode::Monochrome,
        80,
    )]
}
