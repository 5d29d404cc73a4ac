//! Output formatting utilities

use crate::cli::Cli;
use crate::error::JournalError;
use chrono::NaiveDate;
use clap::CommandFactory;

/// Full help text, as printed for an empty invocation
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

/// One-line diagnostic for stderr, prefixed with the program name
pub fn format_error(err: &JournalError, today: NaiveDate) -> String {
    match err {
        JournalError::EntryNotFound { date } if *date == today => {
            "journal: error: entry not found for today".to_string()
        }
        _ => format!("journal: error: {}", err.display_with_suggestions()),
    }
}
