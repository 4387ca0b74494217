// mappack-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Mappack: map document packaging tool",
    long_about = "Batch-exports map documents (.mxd) found in a directory as runtime map packages (.mpk) via an external packaging engine, writing a per-run export log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exports every map document in a directory as a map package
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Run without prompting; unset directories default to the directory
    /// containing this executable
    #[arg(short, long, default_value_t = false)]
    pub silent: bool,

    /// Directory containing the source map documents (prompted for if omitted)
    #[arg(short, long = "input", value_name = "IN_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory the map packages are exported to (prompted for if omitted)
    #[arg(short, long = "output", value_name = "OUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory the export log is written to (prompted for if omitted)
    #[arg(short, long = "log-dir", value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Name of the export log file (the file on disk is prefixed with the run date)
    #[arg(long, value_name = "NAME", default_value = mappack_core::config::DEFAULT_LOG_NAME)]
    pub log_name: String,

    /// Packaging engine executable to invoke
    #[arg(long, value_name = "PROGRAM")]
    pub engine: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export_basic_args() {
        let args = vec![
            "mappack", // Program name
            "export",  // Subcommand
            "--input",
            "maps",
            "--output",
            "packages",
        ];
        let cli = Cli::parse_from(args);

        assert!(!cli.verbose);
        match cli.command {
            Commands::Export(export_args) => {
                assert_eq!(export_args.input_dir, Some(PathBuf::from("maps")));
                assert_eq!(export_args.output_dir, Some(PathBuf::from("packages")));
                assert!(export_args.log_dir.is_none());
                assert!(!export_args.silent);
                assert_eq!(export_args.log_name, "mpk_export.log");
                assert!(export_args.engine.is_none());
            }
        }
    }

    #[test]
    fn test_parse_export_short_flags() {
        let args = vec![
            "mappack", "export", "-s", "-i", "maps", "-o", "packages", "-l", "logs",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Export(export_args) => {
                assert!(export_args.silent);
                assert_eq!(export_args.input_dir, Some(PathBuf::from("maps")));
                assert_eq!(export_args.output_dir, Some(PathBuf::from("packages")));
                assert_eq!(export_args.log_dir, Some(PathBuf::from("logs")));
            }
        }
    }

    #[test]
    fn test_parse_export_log_name_and_engine() {
        let args = vec![
            "mappack",
            "export",
            "--log-name",
            "nightly.log",
            "--engine",
            "/opt/arcpkg/bin/arcpkg",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Export(export_args) => {
                assert_eq!(export_args.log_name, "nightly.log");
                assert_eq!(
                    export_args.engine,
                    Some(PathBuf::from("/opt/arcpkg/bin/arcpkg"))
                );
            }
        }
    }
}
