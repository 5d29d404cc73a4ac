//! CLI argument definitions

use crate::domain::DateReference;
use crate::error::{JournalError, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "journal")]
#[command(
    about = "Simple CLI tool to help with keeping a work/personal journal",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Show today's entries and exit
    #[arg(short, long, conflicts_with = "date")]
    pub today: bool,

    /// Show the entries of DATE (today, yesterday, YYYY-MM-DD, YYYY.MM.DD)
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Show the name of the journal file (of today, or of --date) and exit
    #[arg(short, long)]
    pub file: bool,

    /// Long entry: read the entry from stdin instead of the command line
    #[arg(short, long)]
    pub long: bool,

    /// Open the journal file in your editor after recording
    #[arg(short, long)]
    pub edit: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Text to make an entry in your journal
    #[arg(value_name = "ENTRY")]
    pub entry: Vec<String>,
}

/// The single action a command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Print the day file of a date
    Show(DateReference),
    /// Print the day file path of a date
    ShowPath(DateReference),
    /// Record the text read from stdin
    RecordLong { edit: bool },
    /// Record text given on the command line
    Record { text: String, edit: bool },
    /// Open today's day file in the editor
    Edit,
}

impl Cli {
    /// Resolve flags and positional words into one intent.
    /// Flags are checked in order: today, file, date, long, entry text, edit.
    /// A command line asking for none of these is EmptyInput.
    pub fn intent(&self) -> Result<Intent> {
        let date = self
            .date
            .as_deref()
            .map(DateReference::parse)
            .transpose()?;

        if self.today {
            return Ok(Intent::Show(DateReference::Today));
        }
        if self.file {
            return Ok(Intent::ShowPath(date.unwrap_or(DateReference::Today)));
        }
        if let Some(date) = date {
            return Ok(Intent::Show(date));
        }
        if self.long {
            return Ok(Intent::RecordLong { edit: self.edit });
        }

        let text = self.entry_text();
        if !text.is_empty() {
            return Ok(Intent::Record {
                text,
                edit: self.edit,
            });
        }
        if self.edit {
            return Ok(Intent::Edit);
        }

        Err(JournalError::EmptyInput)
    }

    /// Positional words joined by single spaces and trimmed
    pub fn entry_text(&self) -> String {
        self.entry.join(" ").trim().to_string()
    }
}
