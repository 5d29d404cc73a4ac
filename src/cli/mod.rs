//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Intent};
pub use output::{format_error, help_text};
