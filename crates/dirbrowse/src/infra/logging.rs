//! Optional file logging.
//!
//! The TUI owns stdout and stderr, so tracing output only goes to a file and
//! only when one is configured.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

/// Installs a global `tracing` subscriber appending to `log_file`.
///
/// Does nothing when `log_file` is `None`.
///
/// # Errors
/// Returns an error when the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let Some(log_file) = log_file else {
        return Ok(());
    };

    let file = open_log_file(log_file)?;

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_init_without_log_file_is_noop() {
        // Arrange & Act
        let result = init(None);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_open_log_file_creates_parent_directories() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let log_path = dir.path().join("nested/logs/dirbrowse.log");

        // Act
        let result = open_log_file(&log_path);

        // Assert
        assert!(result.is_ok());
        assert!(log_path.exists());
    }
}
