//! Tests for the scan command

#![allow(clippy::expect_used)]

use crate::commands::scan;
use filehasher_core::{HasherError, ScanOptions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_success_message() {
    let msg = scan::success_message(Path::new("/out/folder1-Hashes_2024-01-01_00-00-00.txt"));
    assert_eq!(
        msg,
        "Successfully created /out/folder1-Hashes_2024-01-01_00-00-00.txt as the Output File!"
    );
}

#[test]
fn test_run_writes_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("folder1");
    fs::create_dir(&root).expect("Failed to create dir");
    fs::write(root.join("Testfile.txt"), b"content").expect("Failed to write file");
    let out = TempDir::new().expect("Failed to create temp dir");

    let options = ScanOptions::new().with_output_dir(out.path());
    let report = scan::run(&root.display().to_string(), &options).expect("Scan should succeed");

    assert!(report.exists());
    let text = fs::read_to_string(report).expect("Failed to read report");
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_run_invalid_root() {
    let err = scan::run("not/valid/path", &ScanOptions::new()).expect_err("Should fail");
    assert!(matches!(
        err.downcast_ref::<HasherError>(),
        Some(HasherError::InvalidRoot { .. })
    ));
    assert!(err.to_string().contains("not/valid/path"));
}
