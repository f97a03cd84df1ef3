//! Generator configuration: output location, token spelling and the suite registry.

use std::fs;
use std::path::{Path, PathBuf};

use manifest_model::ModeTokens;
use serde::{Deserialize, Serialize};
use suites::SuiteFamily;

use crate::ConfigError;

pub const DEFAULT_OUTPUT: &str = "tests.txt";

/// One suite directory bound to the family that classifies it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteRegistration {
    /// Directory under the corpus root.
    pub dir: String,
    pub family: SuiteFamily,
    /// Deepest directory level (below `dir`) whose ROMs are enumerated.
    pub max_depth: usize,
}

impl SuiteRegistration {
    pub fn new(dir: impl Into<String>, family: SuiteFamily, max_depth: usize) -> Self {
        Self {
            dir: dir.into(),
            family,
            max_depth,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub output: PathBuf,
    pub mode_tokens: ModeTokens,
    /// Append the fixed acid/RTC/etc. records.
    pub hand_authored: bool,
    /// Suites walked in order.
    #[serde(rename = "suite")]
    pub suites: Vec<SuiteRegistration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode_tokens: ModeTokens::default(),
            hand_authored: true,
            suites: default_suites(),
        }
    }
}

/// The registry targeted at DMG-CPU-C and CGB-CPU-C class hardware.
fn default_suites() -> Vec<SuiteRegistration> {
    use SuiteFamily::*;
    vec![
        SuiteRegistration::new("blargg", SimpleTiming, 1),
        SuiteRegistration::new("age-test-roms", RegionCoded, 1),
        SuiteRegistration::new("mooneye-test-suite", HardwareAcceptance, 2),
        SuiteRegistration::new("mooneye-test-suite-wilbertpol", HardwareAcceptanceVariant, 2),
        SuiteRegistration::new("mealybug-tearoom-tests", PpuTiming, 1),
        SuiteRegistration::new("same-suite", Combined, 2),
        SuiteRegistration::new("gbmicrotest", Microbenchmark, 1),
        SuiteRegistration::new("docboy-test-suite", SuccessScreenshot, 3),
    ]
}

impl GeneratorConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Suite directories must be plain relative paths below the corpus root.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for suite in &self.suites {
            let invalid = |reason| ConfigError::InvalidSuite {
                dir: suite.dir.clone(),
                reason,
            };
            if suite.dir.is_empty() {
                return Err(invalid("directory is empty"));
            }
            let path = Path::new(&suite.dir);
            if path.is_absolute() {
                return Err(invalid("directory must be relative to the corpus root"));
            }
            if suite.dir.split(['/', '\\']).any(|part| part == "..") {
                return Err(invalid("directory must not leave the corpus root"));
            }
        }
        Ok(())
    }
}
