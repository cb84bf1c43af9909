//! filehasher: CLI for SHA-512 folder reports

use clap::Parser;
use filehasher_cli::{commands, scan_options, setup_logging, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Scan {
            path,
            sort,
            on_unreadable,
            output_dir,
        } => {
            let options = scan_options(sort, on_unreadable, output_dir);
            commands::scan::run(&path, &options)?;
        }
        Commands::File { path } => {
            commands::file::run(&path)?;
        }
    }

    Ok(())
}
