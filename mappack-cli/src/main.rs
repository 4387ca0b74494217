// mappack-cli/src/main.rs
//
// Binary entry point for the Mappack export tool. Parses arguments,
// sets up logging, dispatches the command and maps the outcome to the
// process exit code:
//   0 - clean run (or no input found)
//   1 - batch completed with per-document failures
//   2 - fatal error before or during the run

use clap::Parser;
use colored::*;
use mappack_cli::cli::{Cli, Commands};
use mappack_cli::commands::export::run_export_command;
use std::process;

fn main() {
    let cli = Cli::parse();
    mappack_cli::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Export(args) => run_export_command(args),
    };

    match result {
        Ok(outcome) => {
            if outcome.has_failures() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(2);
        }
    }
}
