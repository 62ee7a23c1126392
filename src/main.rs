//! ps2strip - A CLI tool to strip TARGET_PS2 preprocessor blocks from C/C++
//! source trees
//!
//! Recursively removes `#if defined(TARGET_PS2)` blocks from a source tree,
//! keeping the `#else` branch when present, then reformats the modified files
//! with clang-format when it is installed.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the ps2strip CLI
fn main() {
    if let Err(err) = cli::run() {
        // All reporting, fatal errors included, goes to stdout
        println!("Error: {err}");
        std::process::exit(1);
    }
}
