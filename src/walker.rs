//! Source tree traversal
//!
//! The walker enumerates candidate files under a root directory, recursing
//! into all subdirectories and optionally filtering by file extension.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// File extensions processed by default: C/C++ sources and headers
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "cpp", "h", "hpp", "cc", "cxx"];

/// Errors that can occur while walking the source tree
#[derive(Debug, Error)]
pub enum WalkError {
    /// Root path is not a directory
    #[error("'{0}' is not a valid directory")]
    NotADirectory(PathBuf),
}

/// Recursive directory walker with an optional extension filter
#[derive(Debug, Clone)]
pub struct SourceWalker {
    /// Root directory to walk
    root: PathBuf,

    /// Accepted extensions; `None` accepts every file
    extensions: Option<Vec<String>>,
}

impl SourceWalker {
    /// Create a new walker rooted at the given path.
    ///
    /// Fails fast if the root is not a directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, WalkError> {
        let root = root.as_ref().to_path_buf();

        if !root.is_dir() {
            return Err(WalkError::NotADirectory(root));
        }

        Ok(Self {
            root,
            extensions: None,
        })
    }

    /// Restrict the walk to files with one of the given extensions
    /// (without the leading dot, case-sensitive).
    #[must_use]
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = Some(extensions.iter().map(ToString::to_string).collect());
        self
    }

    /// Get the root path
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate all candidate files under the root.
    ///
    /// Recurses into every subdirectory, hidden ones included. Entries that
    /// cannot be read are logged and skipped; they never abort the walk.
    #[must_use]
    pub fn files(&self) -> Vec<PathBuf> {
        let mut matches = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable entry: {err}");
                    continue;
                },
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if self.accepts(entry.path()) {
                matches.push(entry.into_path());
            }
        }

        // Sort for deterministic output
        matches.sort();
        matches
    }

    /// Check whether a path passes the extension filter
    fn accepts(&self, path: &Path) -> bool {
        let Some(extensions) = &self.extensions else {
            return true;
        };

        path.extension()
            .and_then(std::ffi::OsStr::to_str)
            .is_some_and(|ext| extensions.iter().any(|e| e == ext))
    }
}
