use std::borrow::Cow;
use std::cmp::Ordering;
use std::ffi::OsString;

/// One child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Raw base name of the entry inside its parent directory.
    pub name: OsString,
}

impl Entry {
    /// Creates a directory entry named `name`.
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            is_dir: true,
            name: name.into(),
        }
    }

    /// Creates a file entry named `name`.
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            is_dir: false,
            name: name.into(),
        }
    }

    /// Returns the name for display. Bytes that are not valid UTF-8 are
    /// replaced with `U+FFFD`; paths are always built from [`Self::name`].
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Orders `entries` with directories first, then by raw name within each
/// group (byte order on Unix).
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(first: &Entry, second: &Entry) -> Ordering {
    second
        .is_dir
        .cmp(&first.is_dir)
        .then_with(|| first.name.cmp(&second.name))
}
