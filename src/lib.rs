//! ps2strip - A CLI tool to strip TARGET_PS2 preprocessor blocks from C/C++
//! source trees
//!
//! This library provides the core functionality: recursive source tree
//! traversal, removal of `#if defined(TARGET_PS2)` blocks (keeping the
//! `#else` branch when present), and in-place reformatting of the modified
//! files with an external formatter.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod formatter;
pub mod output;
pub mod stripper;
pub mod walker;
