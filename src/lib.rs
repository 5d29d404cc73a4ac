//! journal - Command-line journaling utility
//!
//! Appends timestamped entries to one text file per day under a journal
//! directory (`~/.journal` by default) and reads them back.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalError;
