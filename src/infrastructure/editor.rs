//! Editor integration for opening day files

use crate::error::{JournalError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Session for opening files in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and wait for the editor to exit
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        debug!(editor = %program, file = %file_path.display(), "launching editor");
        let status = Self::run(&program, &all_args).map_err(|e| {
            JournalError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(JournalError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    // On Windows, go through cmd /c so .bat and .cmd editors are found
    #[cfg(windows)]
    fn run(program: &str, args: &[String]) -> std::io::Result<ExitStatus> {
        Command::new("cmd").arg("/C").arg(program).args(args).status()
    }

    #[cfg(not(windows))]
    fn run(program: &str, args: &[String]) -> std::io::Result<ExitStatus> {
        Command::new(program).args(args).status()
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_simple() {
        let session = EditorSession::new("vim".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "vim");
        assert_eq!(args.len(), 0);
    }

    #[test]
    fn test_parse_command_with_args() {
        let session = EditorSession::new("  code   -w ".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);
    }

    #[test]
    fn test_parse_command_empty_falls_back() {
        let session = EditorSession::new("".to_string());
        let (program, args) = session.parse_command();

        assert!(program == "nano" || program == "notepad");
        assert!(args.is_empty());
    }

    #[test]
    fn test_open_missing_editor_fails() {
        let session = EditorSession::new("journal-test-no-such-editor".to_string());
        let result = session.open(Path::new("2024.05.01.txt"));

        match result.unwrap_err() {
            JournalError::Editor(msg) => assert!(msg.contains("journal-test-no-such-editor")),
            other => panic!("Expected Editor error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_open_waits_for_success() {
        let session = EditorSession::new("sh -c true".to_string());
        session.open(Path::new("2024.05.01.txt")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_open_reports_failed_exit() {
        let session = EditorSession::new("sh -c false".to_string());
        let err = session.open(Path::new("2024.05.01.txt")).unwrap_err();

        assert_eq!(err.exit_code(), 5);
        assert!(err.to_string().contains("exited with"));
    }
}
