//! Generates metadata for the fixture corpus during the build.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Index {
    #[serde(rename = "file")]
    files: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
struct FileEntry {
    path: String,
}

fn rust_string(value: &str) -> String {
    format!("{value:?}")
}

fn kind_variant(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("gb" | "gbc") => "Rom",
        Some("png") => "ReferenceImage",
        _ => "Other",
    }
}

fn check_path(path: &str) -> Result<&str> {
    if path.is_empty() || path.starts_with('/') || path.contains('\\') {
        bail!("fixture path {path:?} must be relative and use '/'");
    }
    if path.split('/').any(|segment| segment.is_empty() || segment == "..") {
        bail!("fixture path {path:?} has an empty or parent segment");
    }
    match path.split_once('/') {
        Some((suite, _)) => Ok(suite),
        None => bail!("fixture path {path:?} must live inside a suite directory"),
    }
}

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let index_path = manifest_dir.join("corpus.index.toml");
    println!("cargo:rerun-if-changed={}", index_path.display());

    let index_str =
        fs::read_to_string(&index_path).with_context(|| format!("reading {index_path:?}"))?;
    let index: Index = toml::from_str(&index_str)?;

    let mut generated = String::new();
    writeln!(&mut generated, "use crate::types::{{FileKind, FixtureFile}};")?;
    writeln!(&mut generated)?;
    generated.push_str("pub(crate) static FILES: &[FixtureFile] = &[\n");

    let mut seen = HashSet::new();
    for file in &index.files {
        let suite = check_path(&file.path)?;
        if !seen.insert(file.path.as_str()) {
            bail!("fixture path {:?} listed twice", file.path);
        }
        writeln!(
            &mut generated,
            "    FixtureFile {{ suite: {}, path: {}, kind: FileKind::{} }},",
            rust_string(suite),
            rust_string(&file.path),
            kind_variant(&file.path)
        )?;
    }
    generated.push_str("];\n");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    fs::write(out_dir.join("generated.rs"), generated)?;

    Ok(())
}
