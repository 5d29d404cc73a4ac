//! Domain layer - Entries and date handling

pub mod date_ref;
pub mod entry;

pub use date_ref::DateReference;
pub use entry::{Entry, EntryLookup};
