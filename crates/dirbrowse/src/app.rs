//! Application state owned by the event loop.

use std::path::Path;

use tracing::{info, warn};

use crate::infra::editor::{CommandRunner, Editor, EditorError};
use crate::infra::lister::{DirectoryLister, ListError};

pub mod browser;
pub mod notice;

pub use browser::{BrowserState, NavEvent, OpenFileIntent, Outcome, Step};
pub use notice::{Notice, NoticeLevel};

/// Follow-up the runtime must perform after one dispatched event.
#[derive(Debug, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    OpenFile(OpenFileIntent),
    Quit,
}

/// Browser state plus the collaborators used to refresh it and open files.
pub struct App {
    editor: Editor,
    lister: Box<dyn DirectoryLister>,
    notice: Option<Notice>,
    runner: Box<dyn CommandRunner>,
    state: BrowserState,
}

impl App {
    /// Builds the initial state by listing `working_dir`.
    ///
    /// # Errors
    /// Returns an error when `working_dir` cannot be listed; the browser has
    /// nothing to show in that case.
    pub fn new(
        working_dir: &Path,
        editor: Editor,
        lister: Box<dyn DirectoryLister>,
        runner: Box<dyn CommandRunner>,
    ) -> Result<Self, ListError> {
        let state = BrowserState::open(working_dir, lister.as_ref())?;
        info!(path = %state.current_path().display(), "opened browser");

        Ok(Self {
            editor,
            lister,
            notice: None,
            runner,
            state,
        })
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Returns the diagnostic produced by the most recent event, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Drops the notice left by the previous key press.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Applies one navigation event, replacing the held state.
    ///
    /// Clears the previous notice first. Listing failures become an error
    /// notice and leave the state untouched.
    pub fn dispatch(&mut self, event: NavEvent) -> AppAction {
        self.clear_notice();

        let state = std::mem::take(&mut self.state);
        let Step { state, outcome } = state.transition(event, self.lister.as_ref());
        self.state = state;

        match outcome {
            Outcome::Continue => AppAction::Continue,
            Outcome::OpenFile(intent) => AppAction::OpenFile(intent),
            Outcome::Quit => AppAction::Quit,
            Outcome::ListFailed(error) => {
                self.notice = Some(Notice::error(error.to_string()));

                AppAction::Continue
            }
        }
    }

    /// Returns whether an editor is configured, recording a notice when not.
    ///
    /// The runtime checks this before releasing the terminal so a missing
    /// `EDITOR` never tears down the screen.
    pub fn ensure_editor_configured(&mut self) -> bool {
        match self.editor.program() {
            Ok(_) => true,
            Err(error) => {
                warn!(%error, "cannot open file");
                self.notice = Some(notice_for_editor_error(&error));

                false
            }
        }
    }

    /// Opens the file named by `intent` and waits for the editor to exit.
    ///
    /// Failures are turned into a notice; the browser state never changes.
    pub fn open_file(&mut self, intent: &OpenFileIntent) {
        info!(path = %intent.path().display(), "opening file in editor");

        if let Err(error) = self.editor.open(intent.path(), self.runner.as_ref()) {
            warn!(%error, "editor did not finish cleanly");
            self.notice = Some(notice_for_editor_error(&error));
        }
    }
}

fn notice_for_editor_error(error: &EditorError) -> Notice {
    match error {
        EditorError::Exited { .. } => Notice::warning(error.to_string()),
        EditorError::NotConfigured | EditorError::Launch { .. } => Notice::error(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;
    use crate::domain::entry::Entry;
    use crate::infra::editor::MockCommandRunner;
    use crate::infra::lister::MockDirectoryLister;

    fn lister_with(entries: Vec<Entry>, failing_path: Option<&'static str>) -> MockDirectoryLister {
        let mut lister = MockDirectoryLister::new();
        lister.expect_list().returning(move |path| {
            if failing_path.is_some_and(|failing| path == Path::new(failing)) {
                return Err(ListError::ReadDir {
                    path: path.to_path_buf(),
                    source: io::Error::from(io::ErrorKind::PermissionDenied),
                });
            }

            Ok(entries.clone())
        });

        lister
    }

    #[cfg(unix)]
    fn exit_status(code: i32) -> std::process::ExitStatus {
        use std::os::unix::process::ExitStatusExt;

        std::process::ExitStatus::from_raw(code << 8)
    }

    fn new_app(editor: Option<&str>, runner: MockCommandRunner) -> App {
        let lister = lister_with(
            vec![Entry::dir("locked"), Entry::file("f.txt")],
            Some("/work/locked"),
        );

        App::new(
            Path::new("/work"),
            Editor::new(editor.map(str::to_string)),
            Box::new(lister),
            Box::new(runner),
        )
        .expect("failed to create app")
    }

    #[test]
    fn test_new_fails_when_working_dir_is_unreadable() {
        // Arrange
        let lister = lister_with(Vec::new(), Some("/work"));

        // Act
        let result = App::new(
            Path::new("/work"),
            Editor::default(),
            Box::new(lister),
            Box::new(MockCommandRunner::new()),
        );

        // Assert
        assert!(matches!(result, Err(ListError::ReadDir { .. })));
    }

    #[test]
    fn test_dispatch_list_failure_sets_error_notice_and_keeps_state() {
        // Arrange
        let mut app = new_app(None, MockCommandRunner::new());
        let before = app.state().clone();

        // Act
        let action = app.dispatch(NavEvent::Enter);

        // Assert
        assert_eq!(action, AppAction::Continue);
        assert_eq!(app.state(), &before);
        let notice = app.notice().expect("expected a notice");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("/work/locked"));
    }

    #[test]
    fn test_dispatch_clears_previous_notice() {
        // Arrange
        let mut app = new_app(None, MockCommandRunner::new());
        app.dispatch(NavEvent::Enter);

        // Act
        let action = app.dispatch(NavEvent::MoveDown);

        // Assert
        assert_eq!(action, AppAction::Continue);
        assert_eq!(app.notice(), None);
        assert_eq!(app.state().cursor(), 1);
    }

    #[test]
    fn test_dispatch_enter_on_file_returns_open_action() {
        // Arrange
        let mut app = new_app(None, MockCommandRunner::new());
        app.dispatch(NavEvent::MoveDown);

        // Act
        let action = app.dispatch(NavEvent::Enter);

        // Assert
        let AppAction::OpenFile(intent) = action else {
            panic!("expected an open-file action");
        };
        assert_eq!(intent.path(), PathBuf::from("/work/f.txt"));
    }

    #[test]
    fn test_dispatch_quit_returns_quit_action() {
        // Arrange
        let mut app = new_app(None, MockCommandRunner::new());

        // Act
        let action = app.dispatch(NavEvent::Quit);

        // Assert
        assert_eq!(action, AppAction::Quit);
    }

    #[test]
    fn test_ensure_editor_configured_without_editor_sets_notice() {
        // Arrange
        let mut app = new_app(None, MockCommandRunner::new());

        // Act
        let configured = app.ensure_editor_configured();

        // Assert
        assert!(!configured);
        let notice = app.notice().expect("expected a notice");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("EDITOR"));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_file_success_leaves_no_notice() {
        // Arrange
        let mut runner = MockCommandRunner::new();
        runner
            .expect_status()
            .times(1)
            .returning(|_| Ok(exit_status(0)));
        let mut app = new_app(Some("vim"), runner);
        app.dispatch(NavEvent::MoveDown);
        let AppAction::OpenFile(intent) = app.dispatch(NavEvent::Enter) else {
            panic!("expected an open-file action");
        };
        let before = app.state().clone();

        // Act
        let configured = app.ensure_editor_configured();
        app.open_file(&intent);

        // Assert
        assert!(configured);
        assert_eq!(app.notice(), None);
        assert_eq!(app.state(), &before);
    }

    #[cfg(unix)]
    #[test]
    fn test_open_file_non_zero_exit_sets_warning() {
        // Arrange
        let mut runner = MockCommandRunner::new();
        runner
            .expect_status()
            .times(1)
            .returning(|_| Ok(exit_status(1)));
        let mut app = new_app(Some("vim"), runner);
        app.dispatch(NavEvent::MoveDown);
        let AppAction::OpenFile(intent) = app.dispatch(NavEvent::Enter) else {
            panic!("expected an open-file action");
        };

        // Act
        app.open_file(&intent);

        // Assert
        let notice = app.notice().expect("expected a notice");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "`vim` exited with status 1");
    }
}
