//! Record entry use case

use crate::error::{JournalError, Result};
use crate::infrastructure::{EditorSession, EntryStore};
use chrono::Local;
use std::path::PathBuf;
use tracing::info;

/// Service for appending entries and opening day files in the editor
pub struct RecordEntryService {
    store: EntryStore,
}

impl RecordEntryService {
    pub fn new(store: EntryStore) -> Self {
        RecordEntryService { store }
    }

    /// Record `text` in today's day file, then open that file in `editor` if given.
    /// Blank text is rejected before anything touches the disk.
    pub fn execute(&self, text: &str, editor: Option<&EditorSession>) -> Result<PathBuf> {
        if text.trim().is_empty() {
            return Err(JournalError::EmptyInput);
        }

        let path = self.store.record(text)?;
        info!(path = %path.display(), "recorded entry");

        if let Some(editor) = editor {
            editor.open(&path)?;
        }

        Ok(path)
    }

    /// Open today's day file in the editor without appending anything
    pub fn edit_today(&self, editor: &EditorSession) -> Result<PathBuf> {
        self.store.ensure_directory()?;

        let path = self.store.resolve_path(Local::now().date_naive());
        editor.open(&path)?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::JournalConfig;
    use std::fs;
    use tempfile::TempDir;

    fn service_in(temp: &TempDir) -> (RecordEntryService, EntryStore) {
        let store = EntryStore::new(JournalConfig::with_directory(temp.path().join(".journal")));
        (RecordEntryService::new(store.clone()), store)
    }

    #[test]
    fn test_record_writes_entry() {
        let temp = TempDir::new().unwrap();
        let (service, store) = service_in(&temp);

        let path = service.execute("walked the dog", None).unwrap();

        assert!(path.starts_with(store.directory()));
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("\n-walked the dog\n\n"));
    }

    #[test]
    fn test_blank_text_rejected_without_side_effects() {
        let temp = TempDir::new().unwrap();
        let (service, store) = service_in(&temp);

        for blank in ["", "   ", "\n\t\n"] {
            assert!(matches!(
                service.execute(blank, None),
                Err(JournalError::EmptyInput)
            ));
        }
        assert!(!store.directory().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_record_then_editor() {
        let temp = TempDir::new().unwrap();
        let (service, _store) = service_in(&temp);
        let editor = EditorSession::new("sh -c true".to_string());

        let path = service.execute("with editor", Some(&editor)).unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("-with editor"));
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_failure_keeps_entry() {
        let temp = TempDir::new().unwrap();
        let (service, store) = service_in(&temp);
        let editor = EditorSession::new("sh -c false".to_string());

        let err = service.execute("kept", Some(&editor)).unwrap_err();
        assert!(matches!(err, JournalError::Editor(_)));

        let today = store.resolve_path(Local::now().date_naive());
        let yesterday = store.resolve_path(Local::now().date_naive() - chrono::Duration::days(1));
        let written = fs::read_to_string(today)
            .or_else(|_| fs::read_to_string(yesterday))
            .unwrap();
        assert!(written.contains("-kept"));
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_today_creates_directory_only() {
        let temp = TempDir::new().unwrap();
        let (service, store) = service_in(&temp);
        let editor = EditorSession::new("sh -c true".to_string());

        let path = service.edit_today(&editor).unwrap();

        assert!(store.directory().is_dir());
        assert!(path.starts_with(store.directory()));
        // The editor never saved, so no day file exists
        assert!(!path.exists());
    }
}
