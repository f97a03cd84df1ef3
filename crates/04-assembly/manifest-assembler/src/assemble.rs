//! The generation pass: walk each registered suite, append the hand-authored
//! records, write once.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use manifest_model::Manifest;
use suites::SuiteFamily;

use crate::{AssembleError, AssembleResult, GeneratorConfig};

/// Per-suite record count from one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuiteSummary {
    pub dir: String,
    pub family: SuiteFamily,
    pub records: usize,
}

/// Builds the manifest for the corpus at `root`. Nothing is written.
///
/// Any filesystem error aborts the whole pass; a partial manifest is never
/// returned.
pub fn assemble(
    root: &Path,
    config: &GeneratorConfig,
) -> AssembleResult<(Manifest, Vec<SuiteSummary>)> {
    let meta = fs::metadata(root).map_err(|source| AssembleError::Root {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(AssembleError::Root {
            path: root.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let mut manifest = Manifest::new();
    let mut summaries = Vec::with_capacity(config.suites.len());

    for suite in &config.suites {
        debug!(
            "walking {} as {} (max depth {})",
            suite.dir, suite.family, suite.max_depth
        );
        let records = corpus::walk(root, &suite.dir, suite.max_depth, &suite.family).map_err(
            |source| AssembleError::Suite {
                suite: suite.dir.clone(),
                source,
            },
        )?;
        summaries.push(SuiteSummary {
            dir: suite.dir.clone(),
            family: suite.family,
            records: records.len(),
        });
        manifest.extend(records);
    }

    if config.hand_authored {
        let fixed = suites::hand_authored();
        debug!("appending {} hand-authored records", fixed.len());
        manifest.extend(fixed);
    }

    for summary in &summaries {
        info!("{:<32} {:>5} records", summary.dir, summary.records);
    }
    info!("{} records total", manifest.len());

    Ok((manifest, summaries))
}

/// Assembles the manifest and overwrites `config.output` with it.
pub fn generate(
    root: &Path,
    config: &GeneratorConfig,
) -> AssembleResult<(Manifest, Vec<SuiteSummary>)> {
    let (manifest, summaries) = assemble(root, config)?;
    manifest
        .write(&config.output, config.mode_tokens)
        .map_err(|source| AssembleError::Write {
            path: config.output.clone(),
            source,
        })?;
    info!("wrote {:?}", config.output);
    Ok((manifest, summaries))
}
