//! A single manifest entry.

use std::fmt::Write as _;

use crate::{InputScript, Mode, ModeTokens};

/// One test case for the runner: a ROM, the mode to run it in, and how to judge it.
///
/// Records are built once and never mutated. The two constructors keep the
/// evidence kinds apart: a screenshot record always names a reference image, an
/// internal-state record never does.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ManifestRecord {
    /// ROM path relative to the corpus root, `/`-separated.
    pub rom_path: String,
    /// Expected frame, relative to the corpus root.
    pub reference_image: Option<String>,
    /// Distinguishes several expectations sharing one ROM.
    pub subtest: Option<String>,
    pub mode: Mode,
    /// Emulated run time in milliseconds.
    pub run_duration_ms: u32,
    /// Exit opcode the runner waits for before sampling.
    pub expected_signature: Option<u8>,
    pub input_script: Option<InputScript>,
    /// Mismatch is reported as a hard failure.
    pub strict_exit: bool,
}

impl ManifestRecord {
    /// Record judged by comparing a rendered frame against `reference_image`.
    pub fn screenshot(
        rom_path: impl Into<String>,
        reference_image: impl Into<String>,
        mode: Mode,
        run_duration_ms: u32,
    ) -> Self {
        Self {
            rom_path: rom_path.into(),
            reference_image: Some(reference_image.into()),
            subtest: None,
            mode,
            run_duration_ms,
            expected_signature: None,
            input_script: None,
            strict_exit: false,
        }
    }

    /// Record judged by machine state after the run.
    pub fn internal_state(rom_path: impl Into<String>, mode: Mode, run_duration_ms: u32) -> Self {
        Self {
            rom_path: rom_path.into(),
            reference_image: None,
            subtest: None,
            mode,
            run_duration_ms,
            expected_signature: None,
            input_script: None,
            strict_exit: false,
        }
    }

    pub fn with_signature(mut self, opcode: u8) -> Self {
        self.expected_signature = Some(opcode);
        self
    }

    pub fn with_subtest(mut self, label: impl Into<String>) -> Self {
        self.subtest = Some(label.into());
        self
    }

    pub fn with_input_script(mut self, script: InputScript) -> Self {
        self.input_script = Some(script);
        self
    }

    pub fn with_strict_exit(mut self) -> Self {
        self.strict_exit = true;
        self
    }

    pub fn is_screenshot(&self) -> bool {
        self.reference_image.is_some()
    }

    /// Renders the record as one manifest line, trailing `,\n` included.
    pub fn render(&self, tokens: ModeTokens) -> String {
        let mut line = String::with_capacity(96);
        line.push('{');
        push_quoted(&mut line, Some(self.rom_path.as_str()));
        line.push_str(", ");
        push_quoted(&mut line, self.reference_image.as_deref());
        line.push_str(", ");
        push_quoted(&mut line, self.subtest.as_deref());
        line.push_str(", ");
        line.push_str(tokens.token(self.mode));
        write!(line, ", {}, ", self.run_duration_ms).expect("write duration");
        match self.expected_signature {
            Some(opcode) => write!(line, "0x{opcode:02X}").expect("write signature"),
            None => line.push('0'),
        }
        line.push_str(", ");
        let script = self.input_script.as_ref().map(ToString::to_string);
        push_quoted(&mut line, script.as_deref());
        line.push_str(if self.strict_exit { ", 1" } else { ", 0" });
        line.push_str("},\n");
        line
    }
}

fn push_quoted(line: &mut String, value: Option<&str>) {
    match value {
        Some(value) => {
            line.push('"');
            line.push_str(value);
            line.push('"');
        }
        None => line.push_str("NULL"),
    }
}
