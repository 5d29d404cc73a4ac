//! Day file storage

use crate::domain::{Entry, EntryLookup};
use crate::error::{JournalError, Result};
use crate::infrastructure::JournalConfig;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DAY_FILE_EXTENSION: &str = "txt";

/// Maps calendar dates to day files in the journal directory
#[derive(Debug, Clone)]
pub struct EntryStore {
    config: JournalConfig,
}

impl EntryStore {
    pub fn new(config: JournalConfig) -> Self {
        EntryStore { config }
    }

    /// Journal directory holding all day files
    pub fn directory(&self) -> &Path {
        &self.config.journal_directory
    }

    /// Day file path for a date. Pure; the file may not exist yet.
    pub fn resolve_path(&self, date: NaiveDate) -> PathBuf {
        self.config.journal_directory.join(format!(
            "{}.{}",
            date.format(&self.config.file_date_format),
            DAY_FILE_EXTENSION
        ))
    }

    /// Create the journal directory (and parents) unless it already exists
    pub fn ensure_directory(&self) -> Result<()> {
        let dir = self.directory();
        if dir.is_dir() {
            return Ok(());
        }

        debug!(path = %dir.display(), "creating journal directory");
        fs::create_dir_all(dir).map_err(|source| JournalError::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })
    }

    /// Append an entry stamped with the current local time
    pub fn record(&self, text: &str) -> Result<PathBuf> {
        self.record_at(Local::now().naive_local(), text)
    }

    /// Append an entry to the day file of `timestamp`'s date.
    ///
    /// Existing content is never truncated; the new block lands after it.
    pub fn record_at(&self, timestamp: NaiveDateTime, text: &str) -> Result<PathBuf> {
        self.ensure_directory()?;

        let entry = Entry::new(timestamp, text);
        let path = self.resolve_path(entry.date());
        let block = entry.render(&self.config.entry_timestamp_format);

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(block.as_bytes())?;

        debug!(path = %path.display(), bytes = block.len(), "appended entry");
        Ok(path)
    }

    /// Full text of the day file for `date`, or Absent when there is none
    pub fn read(&self, date: NaiveDate) -> Result<EntryLookup> {
        let path = self.resolve_path(date);

        // Hand-edited files in another encoding are shown, not rejected
        match fs::read(&path) {
            Ok(bytes) => Ok(EntryLookup::Found(
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no day file");
                Ok(EntryLookup::Absent)
            }
            Err(e) => Err(JournalError::Io(e)),
        }
    }
}
