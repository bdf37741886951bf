//! Report persistence and display

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

/// Write the rendered document to `path`, creating parent directories.
pub fn write_report(path: &Path, html: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, html)?;
    info!(path = %path.display(), "report written");
    Ok(())
}

/// Open the report with the platform default viewer.
///
/// Launch failure is non-fatal: the report is already on disk, so a missing
/// opener only costs the convenience.
pub fn open_in_viewer(path: &Path) {
    let result = viewer_command(path).spawn();
    if let Err(err) = result {
        warn!(path = %path.display(), error = %err, "could not open the report in a viewer");
    }
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("structure.html");
        write_report(&path, "<html></html>").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "<html></html>");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("reports").join("structure.html");
        write_report(&path, "<html></html>").expect("write");
        assert!(path.exists());
    }
}
