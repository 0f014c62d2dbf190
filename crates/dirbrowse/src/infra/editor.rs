//! External editor launch for the open-file intent.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Failure to hand a file to the external editor.
#[derive(Debug, Error)]
pub enum EditorError {
    /// `EDITOR` is unset or blank, so there is nothing to run.
    #[error("EDITOR is not set; export EDITOR to open files")]
    NotConfigured,
    /// The editor process could not be started.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The editor ran but reported failure.
    #[error("`{program}` exited with {}", exit_code_label(.status))]
    Exited { program: String, status: ExitStatus },
}

/// Runs a prepared command to completion with inherited stdio.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs `command` and waits for it to exit.
    ///
    /// # Errors
    /// Returns an error when the process cannot be spawned or awaited.
    fn status(&self, command: &mut Command) -> io::Result<ExitStatus>;
}

/// Spawns real child processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn status(&self, command: &mut Command) -> io::Result<ExitStatus> {
        command.status()
    }
}

/// The configured editor program, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editor {
    program: Option<String>,
}

impl Editor {
    /// Creates an editor from the raw `EDITOR` value. Blank values count as
    /// unset.
    pub fn new(program: Option<String>) -> Self {
        let program = program
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Self { program }
    }

    /// Returns the program name to launch.
    ///
    /// # Errors
    /// Returns [`EditorError::NotConfigured`] when no editor is set.
    pub fn program(&self) -> Result<&str, EditorError> {
        self.program.as_deref().ok_or(EditorError::NotConfigured)
    }

    /// Opens `path` in the editor and blocks until it exits.
    ///
    /// The terminal must already be released by the caller; the child
    /// inherits stdin, stdout and stderr.
    ///
    /// # Errors
    /// Returns an error when no editor is configured, the process cannot be
    /// started, or it exits unsuccessfully.
    pub fn open(&self, path: &Path, runner: &dyn CommandRunner) -> Result<(), EditorError> {
        let program = self.program()?;
        let mut command = Command::new(program);
        command.arg(path);

        let status = runner
            .status(&mut command)
            .map_err(|source| EditorError::Launch {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(EditorError::Exited {
                program: program.to_string(),
                status,
            });
        }

        Ok(())
    }
}

fn exit_code_label(status: &ExitStatus) -> String {
    status
        .code()
        .map_or_else(|| "no exit code".to_string(), |code| format!("status {code}"))
}
