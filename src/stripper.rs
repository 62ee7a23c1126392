//! TARGET_PS2 block removal
//!
//! The stripper applies a single-pass regex substitution to a file's text:
//! every `#if defined(TARGET_PS2) ... [#else ...] #endif` span is replaced by
//! its `#else` body when one is present, and removed entirely otherwise.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::{Captures, Regex};
use thiserror::Error;

/// Matches a whole `#if defined(TARGET_PS2)` block, multiline mode with dot
/// matching newlines. Group 1 captures the `#if` body, group 2 the optional
/// `#else` body. The lazy bodies close the block at the first `#endif` at a
/// line start, so nested conditionals inside the block are unsupported.
const BLOCK_PATTERN: &str =
    r"(?ms)^\s*#if defined\(TARGET_PS2\)\s*$(.*?)(?:^\s*#else\s*$(.*?))?^\s*#endif\s*?$";

/// Errors that can occur while stripping a single file.
///
/// All variants are recoverable: the caller reports the file and continues.
#[derive(Debug, Error)]
pub enum StripError {
    /// File does not exist
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// File is not valid UTF-8 (binary file)
    #[error("not valid UTF-8: {0}")]
    Decode(PathBuf),

    /// Other read failure
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file that failed to read
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Write-back failure
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file that failed to write
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
}

/// Result of processing one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one block was removed and the file was rewritten
    Modified,
    /// No block matched; the file was left untouched
    Unchanged,
}

/// Single-pass block stripper with a pre-compiled pattern
#[derive(Debug)]
pub struct Stripper {
    pattern: Regex,
}

impl Stripper {
    /// Create a stripper with the TARGET_PS2 block pattern compiled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(BLOCK_PATTERN).expect("block pattern is valid"),
        }
    }

    /// Apply the substitution to a text, returning the input unchanged when
    /// no block matches.
    ///
    /// Every non-overlapping match is replaced: with the captured `#else`
    /// body verbatim when present, with the empty string otherwise. All
    /// surrounding text is left untouched.
    #[must_use]
    pub fn strip<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(content, |caps: &Captures<'_>| {
            caps.get(2).map_or_else(String::new, |m| m.as_str().to_owned())
        })
    }

    /// Strip one file in place.
    ///
    /// Reads the full text as UTF-8, applies the substitution, and writes the
    /// result back to the same path only when the content changed. Missing
    /// files, binary files, and IO failures are classified into
    /// [`StripError`] variants for the caller to report.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome, StripError> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => StripError::NotFound(path.to_path_buf()),
            ErrorKind::InvalidData => StripError::Decode(path.to_path_buf()),
            _ => StripError::Read {
                path: path.to_path_buf(),
                source: err,
            },
        })?;

        match self.strip(&content) {
            Cow::Borrowed(_) => Ok(FileOutcome::Unchanged),
            Cow::Owned(new_content) => {
                fs::write(path, new_content).map_err(|err| StripError::Write {
                    path: path.to_path_buf(),
                    source: err,
                })?;
                Ok(FileOutcome::Modified)
            },
        }
    }
}

impl Default for Stripper {
    fn default() -> Self {
        Self::new()
    }
}
