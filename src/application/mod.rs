//! Application layer - Use cases and orchestration

pub mod record_entry;
pub mod show_entry;

pub use record_entry::RecordEntryService;
pub use show_entry::ShowEntryService;
