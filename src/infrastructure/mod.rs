//! Infrastructure layer - Configuration, storage and editor I/O

pub mod config;
pub mod editor;
pub mod store;

pub use config::JournalConfig;
pub use editor::EditorSession;
pub use store::EntryStore;
