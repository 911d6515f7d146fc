//! Atomic file replacement
//!
//! Contents are written to a sibling temp file (`<target>.tmp`), flushed to
//! disk, then renamed over the target. Readers of the target path see either
//! the previous contents or the new contents, never a partial write.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the target file name for the staging file
pub const TEMP_SUFFIX: &str = ".tmp";

/// Target path plus its staging sibling
#[derive(Debug, Clone)]
pub struct AtomicFile {
    target: PathBuf,
    temp: PathBuf,
}

impl AtomicFile {
    /// Create a handle for atomically replacing `target`
    pub fn new<P: AsRef<Path>>(target: P) -> Self {
        let target = target.as_ref().to_path_buf();
        let temp = Self::temp_path_for(&target);
        Self { target, temp }
    }

    /// Staging path for a target: the full file name with [`TEMP_SUFFIX`] appended
    pub fn temp_path_for(target: &Path) -> PathBuf {
        let mut name = OsString::from(target.as_os_str());
        name.push(TEMP_SUFFIX);
        PathBuf::from(name)
    }

    /// Path being replaced
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Staging file path
    pub fn temp(&self) -> &Path {
        &self.temp
    }

    /// Write `contents` to the staging file without touching the target
    ///
    /// The returned [`StagedFile`] must be committed for the target to change.
    /// Dropping it leaves the staging file behind and the target untouched.
    pub fn stage(&self, contents: &[u8]) -> io::Result<StagedFile<'_>> {
        if let Some(parent) = self.target.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(&self.temp)?;
        file.write_all(contents)?;
        file.sync_all()?;

        Ok(StagedFile { file: self })
    }

    /// Stage and commit in one step
    pub fn write(&self, contents: &[u8]) -> io::Result<()> {
        self.stage(contents)?.commit()
    }
}

/// Staging file that has been fully written and flushed
#[must_use = "the target is only replaced once the staged file is committed"]
#[derive(Debug)]
pub struct StagedFile<'a> {
    file: &'a AtomicFile,
}

impl StagedFile<'_> {
    /// Rename the staging file over the target
    pub fn commit(self) -> io::Result<()> {
        fs::rename(&self.file.temp, &self.file.target)?;
        sync_parent_dir(&self.file.target);
        Ok(())
    }
}

/// Persist the rename itself; failures here do not undo the replace
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if let Err(e) = File::open(dir).and_then(|d| d.sync_all()) {
        log::debug!("Could not sync directory {}: {}", dir.display(), e);
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}
