use std::path::{Path, PathBuf};

/// A ROM discovered under a suite directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomFile {
    /// Location on disk.
    pub full_path: PathBuf,
    /// Path relative to the corpus root, `/`-separated.
    pub rom_path: String,
    /// Path relative to the suite root, `/`-separated.
    pub suite_path: String,
}

impl RomFile {
    /// Bare filename, extension included.
    pub fn file_name(&self) -> &str {
        self.rom_path
            .rsplit_once('/')
            .map_or(self.rom_path.as_str(), |(_, name)| name)
    }

    /// Filename without its final extension.
    pub fn stem(&self) -> &str {
        let name = self.file_name();
        name.rsplit_once('.').map_or(name, |(stem, _)| stem)
    }

    /// Directory holding the ROM.
    pub fn dir(&self) -> &Path {
        self.full_path.parent().unwrap_or_else(|| Path::new("."))
    }
}
