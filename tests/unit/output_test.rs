//! Tests for the run report types

use ps2strip::output::{FormatFailure, FormatSummary, RunReport, SkippedFile};

fn sample_report() -> RunReport {
    RunReport {
        root: "src".to_string(),
        files_scanned: 3,
        modified: vec!["src/a.c".to_string()],
        skipped: vec![SkippedFile {
            file: "src/blob.c".to_string(),
            reason: "not valid UTF-8: src/blob.c".to_string(),
        }],
        formatting: FormatSummary {
            formatter: "clang-format".to_string(),
            ran: true,
            skipped_reason: None,
            formatted: vec!["src/a.c".to_string()],
            failed: vec![FormatFailure {
                file: "src/b.c".to_string(),
                reason: "'clang-format' exited with exit status: 1: bad syntax".to_string(),
            }],
        },
    }
}

#[test]
fn test_report_serializes_all_fields() {
    let value = serde_json::to_value(sample_report()).unwrap();

    assert_eq!(value["files_scanned"], 3);
    assert_eq!(value["modified"][0], "src/a.c");
    assert_eq!(value["skipped"][0]["file"], "src/blob.c");
    assert_eq!(value["formatting"]["formatter"], "clang-format");
    assert_eq!(value["formatting"]["ran"], true);
    assert_eq!(value["formatting"]["failed"][0]["file"], "src/b.c");
}

#[test]
fn test_skipped_formatting_serializes_reason() {
    let report = RunReport {
        formatting: FormatSummary {
            formatter: "clang-format".to_string(),
            ran: false,
            skipped_reason: Some("no files to format".to_string()),
            formatted: Vec::new(),
            failed: Vec::new(),
        },
        ..sample_report()
    };

    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value["formatting"]["ran"], false);
    assert_eq!(value["formatting"]["skipped_reason"], "no files to format");
}
