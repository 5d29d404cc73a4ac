//! Date reference parsing and resolution

use crate::error::{JournalError, Result};
use chrono::{Duration, NaiveDate};

/// Represents a user-supplied date that can be resolved to a calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Specific date
    SpecificDate(NaiveDate),
}

impl DateReference {
    /// Parse a date reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            _ => {
                // ISO dates, or the dotted form used by day file names
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .or_else(|_| NaiveDate::parse_from_str(&normalized, "%Y.%m.%d"))
                    .map(DateReference::SpecificDate)
                    .map_err(|_| JournalError::InvalidDate(input.to_string()))
            }
        }
    }

    /// Resolve this reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => base_date,
            DateReference::Yesterday => base_date - Duration::days(1),
            DateReference::SpecificDate(date) => *date,
        }
    }
}
