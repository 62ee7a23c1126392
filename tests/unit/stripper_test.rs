//! Tests for file-level block stripping

use std::fs;

use ps2strip::stripper::{FileOutcome, StripError, Stripper};
use tempfile::TempDir;

use crate::common;

#[test]
fn test_rewrites_file_without_else() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a.c");
    fs::write(&path, common::WITHOUT_ELSE).unwrap();

    let outcome = Stripper::new().process_file(&path).unwrap();
    assert_eq!(outcome, FileOutcome::Modified);

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("ps2_path"));
    assert!(content.contains("int x;"));
    assert!(content.contains("int y;"));
}

#[test]
fn test_rewrites_file_keeping_else_branch() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("b.cpp");
    fs::write(&path, common::WITH_ELSE).unwrap();

    let outcome = Stripper::new().process_file(&path).unwrap();
    assert_eq!(outcome, FileOutcome::Modified);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("portable_path();"));
    assert!(!content.contains("ps2_path"));
    assert!(!content.contains("#endif"));
}

#[test]
fn test_unmatched_file_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("c.h");
    let original = "#pragma once\n\nvoid f(void);\n";
    fs::write(&path, original).unwrap();

    let outcome = Stripper::new().process_file(&path).unwrap();
    assert_eq!(outcome, FileOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_second_pass_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("d.c");
    fs::write(&path, common::WITH_ELSE).unwrap();

    let stripper = Stripper::new();
    assert_eq!(stripper.process_file(&path).unwrap(), FileOutcome::Modified);
    let after_first = fs::read_to_string(&path).unwrap();

    assert_eq!(stripper.process_file(&path).unwrap(), FileOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn test_binary_file_is_skipped_unmodified() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("blob.c");
    let bytes: &[u8] = &[0xff, 0xfe, 0x00, 0x01, 0x80];
    fs::write(&path, bytes).unwrap();

    let err = Stripper::new().process_file(&path).unwrap_err();
    assert!(matches!(err, StripError::Decode(_)));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_missing_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let err = Stripper::new().process_file(&temp.path().join("gone.c")).unwrap_err();
    assert!(matches!(err, StripError::NotFound(_)));
}
