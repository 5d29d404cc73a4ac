//! Show entry use case

use crate::domain::EntryLookup;
use crate::error::{JournalError, Result};
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Service for reading day files back
pub struct ShowEntryService {
    store: EntryStore,
}

impl ShowEntryService {
    pub fn new(store: EntryStore) -> Self {
        ShowEntryService { store }
    }

    /// Text recorded on `date`. A missing or blank day file is EntryNotFound.
    pub fn show(&self, date: NaiveDate) -> Result<String> {
        match self.store.read(date)? {
            EntryLookup::Found(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(JournalError::EntryNotFound { date }),
        }
    }

    /// Day file path for `date`, whether or not it exists
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.store.resolve_path(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::JournalConfig;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup(temp: &TempDir) -> (ShowEntryService, EntryStore) {
        let store = EntryStore::new(JournalConfig::with_directory(temp.path().to_path_buf()));
        (ShowEntryService::new(store.clone()), store)
    }

    #[test]
    fn test_show_recorded_entries() {
        let temp = TempDir::new().unwrap();
        let (service, store) = setup(&temp);
        let day = date(2024, 5, 1);

        store
            .record_at(day.and_hms_opt(8, 0, 0).unwrap(), "A")
            .unwrap();
        store
            .record_at(day.and_hms_opt(9, 0, 0).unwrap(), "B")
            .unwrap();

        let text = service.show(day).unwrap();
        assert_eq!(
            text,
            "2024.05.01 08:00:00 Wed\n-A\n\n2024.05.01 09:00:00 Wed\n-B\n\n"
        );
    }

    #[test]
    fn test_show_missing_is_entry_not_found() {
        let temp = TempDir::new().unwrap();
        let (service, _store) = setup(&temp);

        match service.show(date(2030, 1, 1)).unwrap_err() {
            JournalError::EntryNotFound { date: missing } => {
                assert_eq!(missing, date(2030, 1, 1))
            }
            other => panic!("Expected EntryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_show_blank_file_is_entry_not_found() {
        let temp = TempDir::new().unwrap();
        let (service, store) = setup(&temp);
        fs::write(store.resolve_path(date(2024, 5, 1)), "").unwrap();

        assert!(matches!(
            service.show(date(2024, 5, 1)),
            Err(JournalError::EntryNotFound { .. })
        ));
    }

    #[test]
    fn test_path_for() {
        let temp = TempDir::new().unwrap();
        let (service, _store) = setup(&temp);

        assert_eq!(
            service.path_for(date(2024, 2, 29)),
            temp.path().join("2024.02.29.txt")
        );
    }
}
