//! Bounded-depth traversal of one suite directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use manifest_model::{ManifestRecord, Mode};

use crate::{corpus_relative, CorpusError, CorpusResult, RomFile, SuiteHandler};

/// File extensions treated as ROM images: monochrome-only and dual-mode carts.
pub const ROM_EXTENSIONS: [&str; 2] = ["gb", "gbc"];

/// Lists ROM files under `root/suite_dir`.
///
/// Files directly in the suite directory sit at depth 0; a directory is only
/// entered while its depth stays within `max_depth`. Entries are visited in
/// sorted order.
pub fn rom_files(root: &Path, suite_dir: &str, max_depth: usize) -> CorpusResult<Vec<RomFile>> {
    let suite_root = root.join(suite_dir);
    let mut roms = Vec::new();
    visit(root, &suite_root, &suite_root, 0, max_depth, &mut roms)?;
    Ok(roms)
}

fn visit(
    root: &Path,
    suite_root: &Path,
    dir: &Path,
    depth: usize,
    max_depth: usize,
    roms: &mut Vec<RomFile>,
) -> CorpusResult<()> {
    let mut entries = fs::read_dir(dir)
        .map_err(|err| CorpusError::io(dir, err))?
        .map(|entry| entry.map_err(|err| CorpusError::io(dir, err)))
        .collect::<CorpusResult<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|err| CorpusError::io(&path, err))?;

        if file_type.is_dir() {
            if depth < max_depth {
                visit(root, suite_root, &path, depth + 1, max_depth, roms)?;
            } else {
                trace!("not descending into {path:?}: beyond depth {max_depth}");
            }
            continue;
        }

        if !is_rom(&path) || !path.is_file() {
            continue;
        }

        roms.push(RomFile {
            rom_path: corpus_relative(&path, root)?,
            suite_path: corpus_relative(&path, suite_root)?,
            full_path: path,
        });
    }
    Ok(())
}

fn is_rom(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ROM_EXTENSIONS.contains(&ext))
}

/// Runs `handler` over every ROM under `root/suite_dir`.
///
/// ROMs with reference candidates in at least one mode become screenshot
/// records only. ROMs with none fall through to the filename classifier. ROMs
/// neither mechanism covers are skipped.
pub fn walk<H: SuiteHandler + ?Sized>(
    root: &Path,
    suite_dir: &str,
    max_depth: usize,
    handler: &H,
) -> CorpusResult<Vec<ManifestRecord>> {
    let mut records = Vec::new();
    for rom in rom_files(root, suite_dir, max_depth)? {
        let before = records.len();
        records.extend(records_for(root, &rom, handler)?);
        if records.len() == before {
            debug!("no records for {}", rom.rom_path);
        }
    }
    Ok(records)
}

fn records_for<H: SuiteHandler + ?Sized>(
    root: &Path,
    rom: &RomFile,
    handler: &H,
) -> CorpusResult<Vec<ManifestRecord>> {
    if !handler.has_locator() {
        return Ok(handler.classify_by_filename(rom).unwrap_or_default());
    }

    let mut found: Vec<(Mode, PathBuf)> = Vec::new();
    for mode in Mode::ALL {
        for image in handler.locate_references(mode, rom)? {
            found.push((mode, image));
        }
    }

    if found.is_empty() {
        return Ok(handler.classify_by_filename(rom).unwrap_or_default());
    }

    let mut records = Vec::with_capacity(found.len());
    for (mode, image) in found {
        let image = corpus_relative(&image, root)?;
        if let Some(record) = handler.screenshot_record(mode, rom, &image) {
            records.push(record);
        }
    }
    Ok(records)
}
