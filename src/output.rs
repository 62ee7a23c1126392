//! Output formatting for human and JSON modes
//!
//! This module provides the final run report, renderable either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Report for a whole run: scan, strip, format
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Root directory that was processed
    pub root: String,
    /// Number of candidate files scanned
    pub files_scanned: usize,
    /// Files whose content changed and was rewritten
    pub modified: Vec<String>,
    /// Files skipped with the reason (binary, unreadable, write failure)
    pub skipped: Vec<SkippedFile>,
    /// Result of the formatting pass
    pub formatting: FormatSummary,
}

/// A file the stripper skipped
#[derive(Debug, Serialize)]
pub struct SkippedFile {
    /// The file path
    pub file: String,
    /// Why it was skipped
    pub reason: String,
}

/// Result of the formatting pass
#[derive(Debug, Serialize)]
pub struct FormatSummary {
    /// The formatter binary
    pub formatter: String,
    /// Whether the formatter actually ran
    pub ran: bool,
    /// Why the pass was skipped, when it was
    pub skipped_reason: Option<String>,
    /// Files formatted successfully
    pub formatted: Vec<String>,
    /// Per-file formatter failures
    pub failed: Vec<FormatFailure>,
}

/// A single formatter failure
#[derive(Debug, Serialize)]
pub struct FormatFailure {
    /// The file path
    pub file: String,
    /// The formatter error
    pub reason: String,
}

impl RunReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "\nBatch processed {} file(s), {} modified.",
            self.files_scanned,
            self.modified.len()
        );

        if !self.skipped.is_empty() {
            println!("Skipped {} file(s):", self.skipped.len());
            for s in &self.skipped {
                println!("  - {}: {}", s.file, s.reason);
            }
        }

        if let Some(reason) = &self.formatting.skipped_reason {
            println!("{} {}", "Formatting skipped:".yellow(), reason);
            return;
        }

        if self.formatting.failed.is_empty() {
            println!(
                "{}",
                format!(
                    "Successfully formatted all {} files.",
                    self.formatting.formatted.len()
                )
                .green()
            );
        } else {
            println!(
                "{}",
                format!("Failed to format {} file(s):", self.formatting.failed.len()).red()
            );
            for f in &self.formatting.failed {
                println!("  - {}: {}", f.file, f.reason);
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
