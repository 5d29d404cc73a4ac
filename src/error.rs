//! Error types for journal

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the journal application
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("creating {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("entry not found for {date}")]
    EntryNotFound { date: NaiveDate },

    #[error("no entry given")]
    EmptyInput,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("editor error: {0}")]
    Editor(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::EmptyInput => 2,
            JournalError::EntryNotFound { .. } => 3,
            JournalError::DirectoryCreate { .. } => 4,
            JournalError::Editor(_) => 5,
            JournalError::Config(_) => 6,
            JournalError::InvalidDate(_) => 7,
            JournalError::Io(_) => 1,
        }
    }

    /// Get a user-facing message, with a hint for the errors a user can fix
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::InvalidDate(input) => {
                format!(
                    "invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday\n\
                    • YYYY-MM-DD (e.g., 2024-05-01)\n\
                    • YYYY.MM.DD (e.g., 2024.05.01)",
                    input
                )
            }
            JournalError::Editor(msg) => {
                format!(
                    "editor error: {}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set VISUAL or EDITOR (e.g., export EDITOR=nano)",
                    msg
                )
            }
            JournalError::Config(_) => {
                format!(
                    "{}\n\n\
                    Check JOURNAL_CONFIG or ~/.config/journal/config.toml",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
