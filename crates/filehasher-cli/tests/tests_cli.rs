//! Tests for CLI argument parsing

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use clap::Parser;
use filehasher_cli::{scan_options, Cli, Commands, PolicyArg};
use filehasher_core::UnreadablePolicy;

#[test]
fn test_scan_command_defaults() {
    let cli = Cli::try_parse_from(["filehasher", "scan", "/path/to/folder"]).unwrap();

    assert!(!cli.verbose);
    match cli.command {
        Commands::Scan {
            path,
            sort,
            on_unreadable,
            output_dir,
        } => {
            assert_eq!(path, "/path/to/folder");
            assert!(!sort);
            assert_eq!(on_unreadable, PolicyArg::Omit);
            assert!(output_dir.is_none());
        }
        Commands::File { .. } => panic!("Expected scan command"),
    }
}

#[test]
fn test_scan_command_with_all_args() {
    let cli = Cli::try_parse_from([
        "filehasher",
        "--verbose",
        "scan",
        "C:\\data\\folder1",
        "--sort",
        "--on-unreadable",
        "flag",
        "--output-dir",
        "reports",
    ])
    .unwrap();

    assert!(cli.verbose);
    let Commands::Scan {
        path,
        sort,
        on_unreadable,
        output_dir,
    } = cli.command
    else {
        panic!("Expected scan command");
    };
    assert_eq!(path, "C:\\data\\folder1");
    assert!(sort);
    assert_eq!(on_unreadable, PolicyArg::Flag);
    assert_eq!(output_dir, Some(PathBuf::from("reports")));
}

#[test]
fn test_verbose_is_global() {
    let cli = Cli::try_parse_from(["filehasher", "file", "a.txt", "-v"]).unwrap();
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::File { .. }));
}

#[test]
fn test_invalid_policy_rejected() {
    let parsed = Cli::try_parse_from(["filehasher", "scan", "/x", "--on-unreadable", "retry"]);
    assert!(parsed.is_err());
}

#[test]
fn test_scan_requires_path() {
    assert!(Cli::try_parse_from(["filehasher", "scan"]).is_err());
}

#[test]
fn test_scan_options_mapping() {
    let options = scan_options(true, PolicyArg::Fail, Some(PathBuf::from("/tmp/out")));
    assert!(options.sorted);
    assert_eq!(options.unreadable, UnreadablePolicy::Fail);
    assert_eq!(options.output_dir, Some(PathBuf::from("/tmp/out")));

    let options = scan_options(false, PolicyArg::Omit, None);
    assert_eq!(options.unreadable, UnreadablePolicy::Omit);
    assert!(options.output_dir.is_none());
}
