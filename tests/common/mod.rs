use assert_cmd::Command;
use chrono::Local;
use std::path::{Path, PathBuf};

/// `journal` with HOME pointed at `home` and no user overrides leaking in
pub fn journal_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("journal").unwrap();
    cmd.env("HOME", home);
    cmd.env_remove("XDG_CONFIG_HOME");
    // Windows resolves the home directory without consulting HOME
    if cfg!(windows) {
        cmd.env("JOURNAL_DIR", home.join(".journal"));
    } else {
        cmd.env_remove("JOURNAL_DIR");
    }
    cmd.env_remove("JOURNAL_CONFIG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Today's day file under the default journal directory
pub fn today_file(home: &Path) -> PathBuf {
    home.join(".journal")
        .join(format!("{}.txt", Local::now().format("%Y.%m.%d")))
}
