//! Generates the conformance test manifest for a directory of test ROM suites.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use manifest_assembler::{generate, GeneratorConfig, SuiteSummary};
use manifest_model::ModeTokens;
use std::path::PathBuf;

/// Text rendering helpers used by the CLI.
mod render {
    use manifest_assembler::SuiteSummary;
    use std::fmt::Write;

    /// Format the per-suite record counts printed after generation.
    pub fn summary(summaries: &[SuiteSummary], total: usize) -> String {
        let mut out = String::new();
        for summary in summaries {
            writeln!(
                out,
                "{:<32} {:<28} {:>5}",
                summary.dir, summary.family, summary.records
            )
            .expect("write suite");
        }
        writeln!(out, "{:<61} {total:>5}", "total").expect("write total");
        out
    }
}

/// Classify a test ROM corpus into the runner's manifest.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate the test ROM manifest", long_about = None)]
struct Cli {
    /// Root directory holding one subdirectory per test suite.
    #[arg(value_name = "CORPUS_ROOT")]
    root: PathBuf,

    /// TOML file overriding the output, token spelling or suite registry.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Manifest file to overwrite (defaults to tests.txt).
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Spelling of the mode enumerator in the manifest.
    #[arg(long, value_enum)]
    mode_tokens: Option<ModeTokensArg>,

    /// Skip the fixed acid/RTC/etc. records.
    #[arg(long)]
    no_hand_authored: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeTokensArg {
    /// MONOCHROME / COLOR.
    Generic,
    /// GBMULATOR_MODE_GB / GBMULATOR_MODE_GBC.
    Gbmulator,
}

impl From<ModeTokensArg> for ModeTokens {
    fn from(arg: ModeTokensArg) -> Self {
        match arg {
            ModeTokensArg::Generic => ModeTokens::Generic,
            ModeTokensArg::Gbmulator => ModeTokens::Gbmulator,
        }
    }
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("failed to load config {path:?}"))?,
            None => GeneratorConfig::default(),
        };
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(tokens) = self.mode_tokens {
            config.mode_tokens = tokens.into();
        }
        if self.no_hand_authored {
            config.hand_authored = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    debug!(
        "{} suites, tokens {:?}, hand-authored {}",
        config.suites.len(),
        config.mode_tokens,
        config.hand_authored
    );

    let (manifest, summaries) = generate(&cli.root, &config)
        .with_context(|| format!("failed to generate manifest for {:?}", cli.root))?;

    print_summary(&summaries, manifest.len());
    Ok(())
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // Ignore error if already set.
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn print_summary(summaries: &[SuiteSummary], total: usize) {
    print!("{}", render::summary(summaries, total));
}
