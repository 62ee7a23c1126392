//! Strip TARGET_PS2 blocks across a source tree

use std::path::{Path, PathBuf};

use ps2strip::formatter::Formatter;
use ps2strip::output::{FormatFailure, FormatSummary, OutputMode, RunReport, SkippedFile};
use ps2strip::stripper::{FileOutcome, Stripper};
use ps2strip::walker::{SOURCE_EXTENSIONS, SourceWalker};

/// Walk the tree, strip matching blocks, and format the modified files.
///
/// Per-file failures are reported and skipped; only an invalid root
/// directory is an error.
pub fn strip(
    directory: &Path,
    formatter: &str,
    no_format: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let walker = SourceWalker::new(directory)?.with_extensions(SOURCE_EXTENSIONS);

    if mode == OutputMode::Human {
        println!("Starting recursive processing in: {}", walker.root().display());
    }

    let stripper = Stripper::new();
    let mut modified = Vec::new();
    let mut skipped = Vec::new();
    let mut files_scanned = 0usize;

    for file in walker.files() {
        files_scanned += 1;

        if mode == OutputMode::Human {
            println!("Processing {}...", file.display());
        } else {
            log::debug!("processing {}", file.display());
        }

        match stripper.process_file(&file) {
            Ok(FileOutcome::Modified) => modified.push(file),
            Ok(FileOutcome::Unchanged) => {},
            Err(err) => {
                if mode == OutputMode::Human {
                    println!("Skipping: {err}");
                } else {
                    log::warn!("skipping: {err}");
                }
                skipped.push(SkippedFile {
                    file: file.display().to_string(),
                    reason: err.to_string(),
                });
            },
        }
    }

    let formatting = run_formatter(&modified, formatter, no_format, mode);

    let report = RunReport {
        root: walker.root().display().to_string(),
        files_scanned,
        modified: modified.iter().map(|p| p.display().to_string()).collect(),
        skipped,
        formatting,
    };
    report.render(mode);

    Ok(())
}

/// Run the formatter over the modified files, collecting per-file failures.
///
/// Never aborts early: a missing binary skips the whole pass, a failing file
/// leaves the rest of the list still formatted.
fn run_formatter(
    files: &[PathBuf],
    binary: &str,
    no_format: bool,
    mode: OutputMode,
) -> FormatSummary {
    let mut summary = FormatSummary {
        formatter: binary.to_string(),
        ran: false,
        skipped_reason: None,
        formatted: Vec::new(),
        failed: Vec::new(),
    };

    if no_format {
        summary.skipped_reason = Some("formatting disabled".to_string());
        return summary;
    }

    if files.is_empty() {
        summary.skipped_reason = Some("no files to format".to_string());
        return summary;
    }

    let formatter = Formatter::new(binary);
    if !formatter.is_available() {
        summary.skipped_reason = Some(format!("'{binary}' is not installed or not in PATH"));
        return summary;
    }

    if mode == OutputMode::Human {
        println!("\nRunning {} on {} files...", binary, files.len());
    }

    summary.ran = true;
    for file in files {
        match formatter.format_in_place(file) {
            Ok(()) => {
                if mode == OutputMode::Human {
                    println!("Formatted: {}", file.display());
                } else {
                    log::debug!("formatted {}", file.display());
                }
                summary.formatted.push(file.display().to_string());
            },
            Err(err) => {
                if mode == OutputMode::Human {
                    println!("Error formatting {}: {err}", file.display());
                } else {
                    log::warn!("error formatting {}: {err}", file.display());
                }
                summary.failed.push(FormatFailure {
                    file: file.display().to_string(),
                    reason: err.to_string(),
                });
            },
        }
    }

    summary
}
