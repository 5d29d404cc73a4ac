//! Configuration management

use crate::error::{JournalError, Result};
use chrono::format::{Fixed, Item, Numeric, StrftimeItems};
use chrono::NaiveDate;
use directories::BaseDirs;
use serde::Deserialize;
use std::fmt::{Display, Write};
use std::fs;
use std::path::{Path, PathBuf};

/// Header line pattern, e.g. `2024.05.01 10:00:00 Wed`
pub const DEFAULT_ENTRY_TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S %a";
/// Day file stem pattern, e.g. `2024.05.01`
pub const DEFAULT_FILE_DATE_FORMAT: &str = "%Y.%m.%d";
pub const JOURNAL_DIR_NAME: &str = ".journal";

/// Settings the entry store and editor integration run with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalConfig {
    pub journal_directory: PathBuf,
    pub entry_timestamp_format: String,
    pub file_date_format: String,
    pub editor: Option<String>,
}

/// On-disk shape of config.toml; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub journal_dir: Option<PathBuf>,
    pub entry_timestamp_format: Option<String>,
    pub file_date_format: Option<String>,
    pub editor: Option<String>,
}

impl JournalConfig {
    /// Default settings rooted at the given journal directory
    pub fn with_directory(journal_directory: PathBuf) -> Self {
        JournalConfig {
            journal_directory,
            entry_timestamp_format: DEFAULT_ENTRY_TIMESTAMP_FORMAT.to_string(),
            file_date_format: DEFAULT_FILE_DATE_FORMAT.to_string(),
            editor: None,
        }
    }

    /// Load configuration from the environment and the optional config file.
    ///
    /// `JOURNAL_CONFIG` names an explicit config file which must exist;
    /// otherwise `<config_dir>/journal/config.toml` is read if present.
    /// `JOURNAL_DIR` overrides the journal directory from any source.
    pub fn load() -> Result<Self> {
        let base = BaseDirs::new().ok_or_else(|| {
            JournalError::Config("cannot determine the home directory".to_string())
        })?;

        let file_config = match std::env::var_os("JOURNAL_CONFIG").filter(|v| !v.is_empty()) {
            Some(explicit) => {
                let path = PathBuf::from(explicit);
                Self::load_file(&path)?.ok_or_else(|| {
                    JournalError::Config(format!(
                        "JOURNAL_CONFIG is set to '{}' but the file does not exist",
                        path.display()
                    ))
                })?
            }
            None => {
                let path = Self::default_config_path(&base);
                Self::load_file(&path)?.unwrap_or_default()
            }
        };

        let dir_override = std::env::var_os("JOURNAL_DIR")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self::resolve(base.home_dir(), file_config, dir_override)
    }

    /// Location of the config file when JOURNAL_CONFIG is not set
    pub fn default_config_path(base: &BaseDirs) -> PathBuf {
        base.config_dir().join("journal").join("config.toml")
    }

    /// Read a config file, returning None when it does not exist
    pub fn load_file(path: &Path) -> Result<Option<FileConfig>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(JournalError::Io(e)),
        };

        toml::from_str(&contents).map(Some).map_err(|e| {
            JournalError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Merge defaults, file settings and the directory override, then validate
    pub fn resolve(
        home: &Path,
        file_config: FileConfig,
        dir_override: Option<PathBuf>,
    ) -> Result<Self> {
        let journal_directory = dir_override
            .or(file_config.journal_dir)
            .map(|dir| expand_home(home, dir))
            .unwrap_or_else(|| home.join(JOURNAL_DIR_NAME));

        let config = JournalConfig {
            journal_directory,
            entry_timestamp_format: file_config
                .entry_timestamp_format
                .unwrap_or_else(|| DEFAULT_ENTRY_TIMESTAMP_FORMAT.to_string()),
            file_date_format: file_config
                .file_date_format
                .unwrap_or_else(|| DEFAULT_FILE_DATE_FORMAT.to_string()),
            editor: file_config.editor.filter(|e| !e.trim().is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject format strings that chrono cannot render, and file date
    /// formats that would not produce one plain file name per calendar day
    pub fn validate(&self) -> Result<()> {
        let sample = NaiveDate::from_ymd_opt(2000, 1, 31)
            .and_then(|d| d.and_hms_opt(13, 45, 30))
            .ok_or_else(|| JournalError::Config("invalid sample date".to_string()))?;

        render(sample.format(&self.entry_timestamp_format)).ok_or_else(|| {
            JournalError::Config(format!(
                "invalid entry_timestamp_format: '{}'",
                self.entry_timestamp_format
            ))
        })?;

        let stem = render(sample.date().format(&self.file_date_format)).ok_or_else(|| {
            JournalError::Config(format!(
                "invalid file_date_format: '{}'",
                self.file_date_format
            ))
        })?;

        if stem.trim().is_empty() || stem.contains('/') || stem.contains('\\') {
            return Err(JournalError::Config(format!(
                "file_date_format must produce a plain file name, got '{}'",
                stem
            )));
        }

        // Differs from the first sample in year, month and day
        let other = NaiveDate::from_ymd_opt(2001, 2, 1)
            .ok_or_else(|| JournalError::Config("invalid sample date".to_string()))?;
        let other_stem = render(other.format(&self.file_date_format)).unwrap_or_default();

        if !names_each_day(&self.file_date_format) || stem == other_stem {
            return Err(JournalError::Config(format!(
                "file_date_format must include the year, month and day, got '{}'",
                self.file_date_format
            )));
        }

        Ok(())
    }

    /// Get the editor command: VISUAL, then EDITOR, then config, then platform default
    pub fn get_editor(&self) -> String {
        pick_editor(
            std::env::var("VISUAL").ok(),
            std::env::var("EDITOR").ok(),
            self.editor.as_deref(),
        )
    }
}

fn pick_editor(visual: Option<String>, editor: Option<String>, configured: Option<&str>) -> String {
    visual
        .filter(|v| !v.trim().is_empty())
        .or_else(|| editor.filter(|e| !e.trim().is_empty()))
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// True when the pattern carries a full year plus either month and day,
/// or the day of the year
fn names_each_day(format: &str) -> bool {
    let (mut year, mut month, mut day, mut ordinal) = (false, false, false, false);

    for item in StrftimeItems::new(format) {
        match item {
            Item::Numeric(Numeric::Year, _) => year = true,
            Item::Numeric(Numeric::Month, _)
            | Item::Fixed(Fixed::ShortMonthName)
            | Item::Fixed(Fixed::LongMonthName) => month = true,
            Item::Numeric(Numeric::Day, _) => day = true,
            Item::Numeric(Numeric::Ordinal, _) => ordinal = true,
            _ => {}
        }
    }

    year && ((month && day) || ordinal)
}

fn expand_home(home: &Path, dir: PathBuf) -> PathBuf {
    match dir.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => dir,
    }
}

fn render(value: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", value).ok().map(|_| out)
}
