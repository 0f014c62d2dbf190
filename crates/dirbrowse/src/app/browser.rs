//! Navigation state machine for the directory browser.
//!
//! Every transition consumes the current [`BrowserState`] and returns a
//! [`Step`] holding the next state and what the host should do about it.
//! Directory refreshes happen in exactly one place, `BrowserState::change_dir`,
//! shared by [`BrowserState::enter`] and [`BrowserState::go_to_parent`].

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entry::Entry;
use crate::infra::lister::{DirectoryLister, ListError};

/// One discrete navigation input delivered by the UI host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    MoveUp,
    MoveDown,
    Enter,
    GoToParent,
    Quit,
}

/// Request to hand one file to the external editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenFileIntent {
    path: PathBuf,
}

impl OpenFileIntent {
    /// Returns the absolute path of the file to open.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// What the host should do after a transition.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing beyond rendering the new state.
    Continue,
    /// Launch the editor for the selected file.
    OpenFile(OpenFileIntent),
    /// Stop the interaction loop.
    Quit,
    /// A refresh failed; the returned state is the previous one.
    ListFailed(ListError),
}

/// Result of applying one [`NavEvent`].
#[derive(Debug)]
pub struct Step {
    pub state: BrowserState,
    pub outcome: Outcome,
}

impl Step {
    fn continue_with(state: BrowserState) -> Self {
        Self {
            state,
            outcome: Outcome::Continue,
        }
    }
}

/// Current directory, its listing and the highlighted row.
///
/// `cursor` always indexes into `entries`, or is `0` when the directory is
/// empty. The `Default` value is an empty placeholder used while a transition
/// holds the real state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserState {
    current_path: PathBuf,
    cursor: usize,
    entries: Vec<Entry>,
}

impl BrowserState {
    /// Lists `path` and builds the initial state with the cursor on the first
    /// entry. Relative paths are resolved against the working directory.
    ///
    /// # Errors
    /// Returns an error when `path` cannot be resolved or listed.
    pub fn open(path: &Path, lister: &dyn DirectoryLister) -> Result<Self, ListError> {
        let absolute = std::path::absolute(path).map_err(|source| ListError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
        let current_path = normalize_path(&absolute);
        let entries = lister.list(&current_path)?;

        Ok(Self {
            current_path,
            cursor: 0,
            entries,
        })
    }

    /// Returns the directory being shown.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Returns the listing of [`Self::current_path`].
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the highlighted row index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the highlighted entry, or `None` for an empty directory.
    pub fn selected(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Applies `event` and returns the next state with its outcome.
    pub fn transition(self, event: NavEvent, lister: &dyn DirectoryLister) -> Step {
        match event {
            NavEvent::MoveUp => Step::continue_with(self.move_up()),
            NavEvent::MoveDown => Step::continue_with(self.move_down()),
            NavEvent::Enter => self.enter(lister),
            NavEvent::GoToParent => self.go_to_parent(lister),
            NavEvent::Quit => Step {
                state: self,
                outcome: Outcome::Quit,
            },
        }
    }

    /// Moves the cursor one row up, stopping at the first row.
    #[must_use]
    pub fn move_up(mut self) -> Self {
        self.cursor = self.cursor.saturating_sub(1);

        self
    }

    /// Moves the cursor one row down, stopping at the last row.
    #[must_use]
    pub fn move_down(mut self) -> Self {
        let last_index = self.entries.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(last_index);

        self
    }

    /// Descends into the selected directory, or requests opening the selected
    /// file. Does nothing for an empty directory.
    pub fn enter(self, lister: &dyn DirectoryLister) -> Step {
        let Some((target, is_dir)) = self
            .selected()
            .map(|entry| (self.current_path.join(&entry.name), entry.is_dir))
        else {
            return Step::continue_with(self);
        };

        if is_dir {
            return self.change_dir(target, lister);
        }

        Step {
            state: self,
            outcome: Outcome::OpenFile(OpenFileIntent { path: target }),
        }
    }

    /// Moves to the parent directory. At the filesystem root this refreshes
    /// the root listing.
    pub fn go_to_parent(self, lister: &dyn DirectoryLister) -> Step {
        let parent = self
            .current_path
            .parent()
            .map_or_else(|| self.current_path.clone(), Path::to_path_buf);

        self.change_dir(parent, lister)
    }

    /// Replaces the whole state with the listing of `path`, keeping the
    /// current state when the listing fails.
    fn change_dir(self, path: PathBuf, lister: &dyn DirectoryLister) -> Step {
        match lister.list(&path) {
            Ok(entries) => {
                debug!(path = %path.display(), entries = entries.len(), "changed directory");

                Step::continue_with(Self {
                    current_path: path,
                    cursor: 0,
                    entries,
                })
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "keeping previous directory");

                Step {
                    state: self,
                    outcome: Outcome::ListFailed(error),
                }
            }
        }
    }
}

/// Removes `.` components and resolves `..` lexically. `..` at the root stays
/// at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
