use crate::{AttendanceRecord, CoreError, error::Result};

use std::{
    fs::{self, File, OpenOptions},
    io::{ErrorKind, Write},
    panic::Location,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use error_location::ErrorLocation;
use tracing::debug;

/// Append-only flat-file store of [`AttendanceRecord`] lines.
///
/// The file is created on first append and never truncated, rewritten, or
/// compacted. Appends from concurrent requests are serialized through an
/// internal mutex so interleaved partial lines cannot occur within one
/// process. Reads take no lock: the file only ever grows, so the worst a
/// concurrent reader can observe is a missing trailing line.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl RecordStore {
    /// Create a store handle for the given file path.
    ///
    /// The file itself is not touched until the first [`append`](Self::append).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            append_lock: Mutex::new(()),
        }
    }

    /// Path of the underlying store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record line, creating the file if it does not exist.
    ///
    /// The file handle is acquired and released within this call on every
    /// exit path.
    pub fn append(&self, record: &AttendanceRecord) -> Result<()> {
        let _guard = self.append_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(record.as_line().as_bytes())?;

        debug!(path = ?self.path, name = %record.name, "record appended");
        Ok(())
    }

    /// Read the full store contents, oldest line first.
    ///
    /// Fails with [`CoreError::NotFound`] if no record has ever been appended.
    #[track_caller]
    pub fn read_all(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| self.map_missing(e))
    }

    /// Open a sequential read handle for streamed transfer.
    ///
    /// Fails with [`CoreError::NotFound`] if the file does not exist. An IO
    /// fault after the handle is handed out terminates the consumer's stream
    /// early; bytes already sent are not retracted.
    #[track_caller]
    pub fn open_for_streaming(&self) -> Result<File> {
        File::open(&self.path).map_err(|e| self.map_missing(e))
    }

    #[track_caller]
    fn map_missing(&self, source: std::io::Error) -> CoreError {
        if source.kind() == ErrorKind::NotFound {
            CoreError::NotFound {
                path: self.path.clone(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            CoreError::from(source)
        }
    }
}
