//! Directory listing used to populate the browser.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entry::{Entry, sort_entries};

/// Failure to produce a complete listing for one directory.
#[derive(Debug, Error)]
pub enum ListError {
    /// The directory could not be opened or enumerated.
    #[error("cannot read directory `{}`: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// One child could not be classified as file or directory.
    #[error("cannot read metadata for `{}`: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    /// Returns the path the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDir { path, .. } | Self::Metadata { path, .. } => path,
        }
    }
}

/// Produces the children of one directory.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryLister {
    /// Lists `path`, directories first and then files, each group by name.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be read or any child cannot
    /// be classified. A partial listing is never returned.
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListError>;
}

/// Lists directories through `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListError> {
        let read_dir_error = |source| ListError::ReadDir {
            path: path.to_path_buf(),
            source,
        };
        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(path).map_err(read_dir_error)? {
            let dir_entry = dir_entry.map_err(read_dir_error)?;
            let file_type = dir_entry
                .file_type()
                .map_err(|source| ListError::Metadata {
                    path: dir_entry.path(),
                    source,
                })?;

            entries.push(Entry {
                is_dir: file_type.is_dir(),
                name: dir_entry.file_name(),
            });
        }

        sort_entries(&mut entries);

        Ok(entries)
    }
}
