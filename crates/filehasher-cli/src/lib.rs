//! filehasher-cli library
//!
//! This module exposes the argument types and commands of filehasher-cli for testing purposes.

pub mod cli;
pub mod commands;

pub use cli::{scan_options, Cli, Commands, PolicyArg};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log filter for the given verbosity
#[must_use]
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global tracing subscriber
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose))
        .init();
}
