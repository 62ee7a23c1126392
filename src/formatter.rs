//! External formatter invocation
//!
//! Wraps an externally installed formatter binary (clang-format by default),
//! invoked in-place as `<formatter> -i <file>`. Availability is probed with a
//! version query so a missing binary downgrades to a skipped formatting pass
//! instead of a failed run.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Formatter binary used when none is configured
pub const DEFAULT_FORMATTER: &str = "clang-format";

/// Errors from a single formatter invocation
#[derive(Debug, Error)]
pub enum FormatError {
    /// The formatter process could not be spawned
    #[error("failed to run '{bin}': {source}")]
    Spawn {
        /// The formatter binary
        bin: String,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// The formatter ran but exited with a failure status
    #[error("'{bin}' exited with {status}: {stderr}")]
    Failed {
        /// The formatter binary
        bin: String,
        /// The process exit status
        status: std::process::ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },
}

/// In-place invoker for an external formatter binary
#[derive(Debug, Clone)]
pub struct Formatter {
    binary: String,
}

impl Formatter {
    /// Create a formatter wrapping the given binary name or path
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Get the configured binary name
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Probe whether the formatter is invocable (`<binary> --version`)
    #[must_use]
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Format one file in place (`<binary> -i <file>`)
    pub fn format_in_place(&self, path: &Path) -> Result<(), FormatError> {
        let output = Command::new(&self.binary)
            .arg("-i")
            .arg(path)
            .output()
            .map_err(|err| FormatError::Spawn {
                bin: self.binary.clone(),
                source: err,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(FormatError::Failed {
                bin: self.binary.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATTER)
    }
}
