//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use filehasher_core::{ScanOptions, UnreadablePolicy};

#[derive(Debug, Parser)]
#[command(name = "filehasher")]
#[command(author, version, about = "SHA-512 digest reports for folders", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hash every file in a folder and write a report
    Scan {
        /// Folder to scan
        path: String,

        /// Sort report entries by path
        #[arg(long)]
        sort: bool,

        /// What to do with files that cannot be read
        #[arg(long, value_enum, default_value_t = PolicyArg::Omit)]
        on_unreadable: PolicyArg,

        /// Directory to write the report to (defaults to the working directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Print the SHA-512 digest of a single file
    File {
        /// File to hash
        path: PathBuf,
    },
}

/// Unreadable-file policy as a CLI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Leave unreadable files out of the report
    Omit,
    /// List unreadable files without a digest
    Flag,
    /// Abort the scan
    Fail,
}

impl From<PolicyArg> for UnreadablePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Omit => Self::Omit,
            PolicyArg::Flag => Self::Flag,
            PolicyArg::Fail => Self::Fail,
        }
    }
}

/// Build core scan options from `scan` arguments
#[must_use]
pub fn scan_options(
    sort: bool,
    on_unreadable: PolicyArg,
    output_dir: Option<PathBuf>,
) -> ScanOptions {
    let options = ScanOptions::new()
        .with_sorted(sort)
        .with_unreadable(on_unreadable.into());
    match output_dir {
        Some(dir) => options.with_output_dir(dir),
        None => options,
    }
}
