//! Implementation of the 'export' subcommand.
//!
//! Resolves the three working directories (interactively unless
//! --silent), validates them up front, and delegates the batch to the
//! mappack-core library.

use crate::cli::ExportArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::prompt::prompt_line;

use mappack_core::config::{CoreConfig, DEFAULT_ENGINE_PROGRAM};
use mappack_core::external::{check_engine, CommandPackager};
use mappack_core::validate::ensure_directory;
use mappack_core::{format_bytes, format_duration, CoreError, RunOutcome};

use colored::*;
use log::{debug, info, warn};

use std::path::PathBuf;
use std::time::Instant;

/// Attempts allowed when an interactively entered path turns out to be
/// a file.
const MAX_PROMPT_ATTEMPTS: u32 = 3;

/// Role of a directory in the run, used for prompts and messages.
#[derive(Debug, Clone, Copy)]
enum DirRole {
    Input,
    Output,
    Log,
}

impl DirRole {
    fn prompt(self) -> &'static str {
        match self {
            DirRole::Input => "Enter input folder: ",
            DirRole::Output => "Enter destination folder for map packages: ",
            DirRole::Log => "Enter folder for logfiles: ",
        }
    }
}

/// Directory of the running executable, the silent-mode default.
fn executable_dir() -> CliResult<PathBuf> {
    let exe = std::env::current_exe().cli_context("Failed to locate the running executable")?;
    Ok(exe
        .parent()
        .cli_context("Executable path has no parent directory")?
        .to_path_buf())
}

/// Resolves one directory argument according to the interaction policy.
///
/// Explicitly given paths are validated (and created if missing) right
/// away so the batch never starts against an unusable directory. In
/// silent mode an unset directory falls back to the executable's own
/// directory; otherwise the operator is prompted, with a bounded number
/// of retries when the entered path refers to a file.
fn resolve_dir(given: Option<PathBuf>, role: DirRole, silent: bool) -> CliResult<PathBuf> {
    if let Some(path) = given {
        ensure_directory(&path)?;
        return Ok(path);
    }

    if silent {
        return executable_dir();
    }

    let mut attempts = 0;
    loop {
        attempts += 1;
        let entered = prompt_line(role.prompt())?;
        let path = PathBuf::from(entered);
        match ensure_directory(&path) {
            Ok(()) => return Ok(path),
            Err(CoreError::NotADirectory(p)) if attempts < MAX_PROMPT_ATTEMPTS => {
                warn!(
                    "{} refers to a file. Please provide a directory path.",
                    p.display()
                );
            }
            Err(e) => return Err(e),
        }
    }
}

/// Prints the per-document summary once the batch is over.
fn render_outcome(outcome: &RunOutcome, run_start: Instant) {
    if let RunOutcome::Completed { exported, .. } = outcome {
        if !exported.is_empty() {
            info!("{}", "Export summary:".bold());
            for report in exported {
                info!(
                    "  {} -> {} ({}, {})",
                    report.document,
                    report.package_path.display(),
                    format_bytes(report.package_size),
                    format_duration(report.duration)
                );
            }
        }
    }
    info!("Total run time: {}", format_duration(run_start.elapsed()));
}

/// Runs the export command and returns the outcome for exit-code
/// mapping in `main`.
pub fn run_export_command(args: ExportArgs) -> CliResult<RunOutcome> {
    let run_start = Instant::now();

    let silent = args.silent;
    let input_dir = resolve_dir(args.input_dir, DirRole::Input, silent)?;
    let output_dir = resolve_dir(args.output_dir, DirRole::Output, silent)?;
    let log_dir = resolve_dir(args.log_dir, DirRole::Log, silent)?;

    // A missing engine would fail every single document; check once
    // before the batch.
    let engine = args
        .engine
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENGINE_PROGRAM));
    check_engine(&engine)?;

    let mut config = CoreConfig::new(input_dir, output_dir, log_dir);
    config.log_name = args.log_name;
    config.engine_program = engine.clone();

    info!("{}", "========================================".cyan());
    info!("{} {}", "Input directory:".bold(), config.input_dir.display());
    info!(
        "{} {}",
        "Output directory:".bold(),
        config.output_dir.display()
    );
    info!("{} {}", "Log directory:".bold(), config.log_dir.display());
    debug!("Packaging engine: {}", config.engine_program.display());
    debug!("Run started: {}", chrono::Local::now());
    info!("{}", "========================================".cyan());

    let packager = CommandPackager::new(engine);
    let outcome = mappack_core::run_export(&packager, &config)?;

    render_outcome(&outcome, run_start);
    Ok(outcome)
}
