use std::path::PathBuf;

use crate::infra::editor::Editor;

/// Environment variable naming the editor used to open files.
pub const EDITOR_ENV: &str = "EDITOR";
/// Environment variable naming an optional log file.
pub const LOG_FILE_ENV: &str = "DIRBROWSE_LOG";

/// Process configuration resolved once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub editor: Editor,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from `lookup`, which returns the value of one
    /// environment variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_file = lookup(LOG_FILE_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self {
            editor: Editor::new(lookup(EDITOR_ENV)),
            log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();

        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_editor_and_log_file() {
        // Arrange
        let lookup = lookup_from(&[("EDITOR", "hx"), ("DIRBROWSE_LOG", "/tmp/dirbrowse.log")]);

        // Act
        let config = Config::from_lookup(lookup);

        // Assert
        assert_eq!(config.editor, Editor::new(Some("hx".to_string())));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/dirbrowse.log")));
    }

    #[test]
    fn test_from_lookup_without_variables() {
        // Arrange
        let lookup = lookup_from(&[]);

        // Act
        let config = Config::from_lookup(lookup);

        // Assert
        assert!(config.editor.program().is_err());
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_from_lookup_ignores_blank_log_file() {
        // Arrange
        let lookup = lookup_from(&[("DIRBROWSE_LOG", "  ")]);

        // Act
        let config = Config::from_lookup(lookup);

        // Assert
        assert_eq!(config.log_file, None);
    }
}
