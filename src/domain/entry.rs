//! Journal entries and day file lookups

use chrono::{NaiveDate, NaiveDateTime};

/// One timestamped block of text appended to a day file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub timestamp: NaiveDateTime,
    pub text: String,
}

impl Entry {
    pub fn new(timestamp: NaiveDateTime, text: impl Into<String>) -> Self {
        Entry {
            timestamp,
            text: text.into(),
        }
    }

    /// Calendar date of the day file this entry belongs to
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Render the entry block: header line, dash-prefixed body, blank line.
    ///
    /// `timestamp_format` must be a valid strftime pattern; configuration
    /// loading rejects invalid ones before they reach this point.
    pub fn render(&self, timestamp_format: &str) -> String {
        format!(
            "{}\n-{}\n\n",
            self.timestamp.format(timestamp_format),
            self.text
        )
    }
}

/// Result of reading a day file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryLookup {
    /// Full text of the day file
    Found(String),
    /// No day file exists for the date
    Absent,
}

#[cfg(test)]
impl EntryLookup {
    pub fn into_option(self) -> Option<String> {
        match self {
            EntryLookup::Found(text) => Some(text),
            EntryLookup::Absent => None,
        }
    }
}
