//! Persistent alarm store
//!
//! Keeps an ordered list of [`ThresholdAlarm`] definitions in memory and
//! mirrors it to a JSON file. Every mutation rewrites the whole file through
//! [`AtomicFile`], so the backing file is never observed half-written.
//!
//! File format:
//!
//! ```json
//! [
//!   { "type": "cpu", "threshold": 80.0 },
//!   { "type": "mem", "threshold": 75.5 }
//! ]
//! ```

pub mod atomic;

pub use atomic::{AtomicFile, StagedFile, TEMP_SUFFIX};

use crate::domain::{AlarmType, ThresholdAlarm};
use crate::error::{BoxedCause, StoreError};
use std::fs;
use std::io;
use std::path::Path;

/// Ordered, file-backed collection of alarm definitions
///
/// Alarms are identified only by position. Mutations are written to disk
/// before they become visible in memory: if the write fails, the in-memory
/// list is left exactly as it was and the error is returned.
///
/// There is no locking. Two stores on the same path will overwrite each
/// other's snapshots (last rename wins).
#[derive(Debug)]
pub struct AlarmStore {
    file: AtomicFile,
    alarms: Vec<ThresholdAlarm>,
}

impl AlarmStore {
    /// Backing file used by [`AlarmStore::open_default`]
    pub const DEFAULT_FILE: &'static str = "alarms.json";

    /// Open a store backed by `path`, loading any existing alarms
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    /// `StoreError::Format` if the file is not a list, `StoreError::Load` if
    /// it cannot be read or any entry is invalid.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let mut store = Self {
            file: AtomicFile::new(path),
            alarms: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Open a store backed by [`Self::DEFAULT_FILE`] in the working directory
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(Self::DEFAULT_FILE)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.file.target()
    }

    /// Replace the in-memory list with the contents of the backing file
    ///
    /// All-or-nothing: on error the current list is kept.
    pub fn load(&mut self) -> Result<(), StoreError> {
        self.alarms = read_alarms(self.path())?;
        log::debug!(
            "Loaded {} alarm(s) from {}",
            self.alarms.len(),
            self.path().display()
        );
        Ok(())
    }

    /// Write the full in-memory list to the backing file
    pub fn save(&self) -> Result<(), StoreError> {
        self.persist(&self.alarms)
    }

    /// Snapshot of all alarms in order
    pub fn list(&self) -> Vec<ThresholdAlarm> {
        self.alarms.clone()
    }

    /// Borrow all alarms in order
    pub fn alarms(&self) -> &[ThresholdAlarm] {
        &self.alarms
    }

    /// Number of stored alarms
    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    /// True when no alarms are stored
    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }

    /// Append a new alarm and persist
    ///
    /// # Errors
    /// `StoreError::Domain` for a non-finite threshold, `StoreError::Io` or
    /// `StoreError::Serialize` if persisting fails. The store is unchanged
    /// on error.
    pub fn add(
        &mut self,
        alarm_type: AlarmType,
        threshold: f64,
    ) -> Result<ThresholdAlarm, StoreError> {
        let alarm = ThresholdAlarm::new(alarm_type, threshold)?;

        let mut next = Vec::with_capacity(self.alarms.len() + 1);
        next.extend_from_slice(&self.alarms);
        next.push(alarm);

        self.persist(&next)?;
        self.alarms = next;
        Ok(alarm)
    }

    /// Remove the alarm at `index` and persist
    ///
    /// Non-negative indices count from the front, negative ones from the back
    /// (`-1` is the last alarm).
    ///
    /// # Errors
    /// `StoreError::IndexOutOfRange` if no alarm sits at `index`; nothing is
    /// written in that case.
    pub fn remove_index(&mut self, index: isize) -> Result<ThresholdAlarm, StoreError> {
        let pos = self.resolve_index(index)?;

        let mut next = self.alarms.clone();
        let removed = next.remove(pos);

        self.persist(&next)?;
        self.alarms = next;
        Ok(removed)
    }

    /// Map a signed index onto a position in the list
    pub fn resolve_index(&self, index: isize) -> Result<usize, StoreError> {
        let len = self.alarms.len();
        let pos = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize).filter(|&i| i < len)
        };
        pos.ok_or(StoreError::IndexOutOfRange { index, len })
    }

    fn persist(&self, alarms: &[ThresholdAlarm]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(alarms)?;
        self.file.write(contents.as_bytes())?;
        log::debug!(
            "Saved {} alarm(s) to {}",
            alarms.len(),
            self.path().display()
        );
        Ok(())
    }
}

/// Read and validate a backing file; a missing file is an empty list
fn read_alarms(path: &Path) -> Result<Vec<ThresholdAlarm>, StoreError> {
    let load_error = |source: BoxedCause| StoreError::Load {
        path: path.to_path_buf(),
        source,
    };

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(load_error(Box::new(e))),
    };

    let document: serde_json::Value =
        serde_json::from_str(&contents).map_err(|e| load_error(Box::new(e)))?;

    if !document.is_array() {
        return Err(StoreError::Format {
            path: path.to_path_buf(),
        });
    }

    // Re-read from text so element errors keep their line and column
    serde_json::from_str(&contents).map_err(|e| load_error(Box::new(e)))
}
