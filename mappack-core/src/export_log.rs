//! Append-only export log lifecycle.
//!
//! One log file is written per run, named `{date}__{log_name}`. It
//! receives a two-line header, one numbered block per failure and a
//! closing summary. The log is a deliverable of the tool, written
//! through its own file handle rather than the process logging
//! pipeline.

use crate::error::{CoreError, CoreResult};
use crate::RunOutcome;

use chrono::Local;
use log::{error, info, warn};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only log for one export run.
///
/// Created before the batch starts, fed one block per failure and
/// finished with a summary line. The file handle is exclusively owned;
/// `finish` consumes the log, so the handle is released on every path,
/// including after a failed write.
pub struct ExportLog {
    path: PathBuf,
    writer: BufWriter<File>,
    error_count: u32,
}

impl ExportLog {
    /// Creates `{date}__{log_name}` inside `log_dir` and writes the header.
    ///
    /// Fails with `CoreError::Io` when the directory is not writable;
    /// callers treat that as fatal (no log means no run).
    pub fn create(log_dir: &Path, log_name: &str) -> CoreResult<Self> {
        let date = Local::now().format("%Y-%m-%d").to_string();
        let path = log_dir.join(format!("{date}__{log_name}"));
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "Map package export log - {date}")?;
        writeln!(writer, "------------------------------------")?;
        writer.flush()?;

        Ok(Self {
            path,
            writer,
            error_count: 0,
        })
    }

    /// Path of the log file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of error blocks recorded so far.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Appends one numbered error block for `document` and bumps the
    /// counter. This is the only mutation path for the counter.
    pub fn record(&mut self, document: &str, error: &CoreError) -> CoreResult<()> {
        self.error_count += 1;
        writeln!(self.writer, "#################")?;
        writeln!(self.writer, "Error number: {}", self.error_count)?;
        writeln!(self.writer, "Caused by: {document}")?;
        writeln!(self.writer, "Message:")?;
        writeln!(self.writer, "{error}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Writes the closing summary for `outcome` and releases the file
    /// handle.
    ///
    /// Clean and empty-input runs are summarized in both the console
    /// and the file; failure tallies go to the console only, the file
    /// already carries the detail blocks.
    pub fn finish(mut self, outcome: &RunOutcome) -> CoreResult<()> {
        info!("-------");
        match outcome {
            RunOutcome::NoInput => {
                warn!("There are no map documents in the given input directory.");
                writeln!(
                    self.writer,
                    "The given input directory was empty, so no map package could be exported."
                )?;
            }
            RunOutcome::Completed { failures, .. } if failures.is_empty() => {
                info!("All map packages successfully created.");
                writeln!(
                    self.writer,
                    "CONGRATULATIONS! No errors occurred during processing."
                )?;
            }
            RunOutcome::Completed { failures, .. } if failures.len() == 1 => {
                error!(
                    "An error occurred during packaging. Refer to the logfile for detailed information."
                );
            }
            RunOutcome::Completed { failures, .. } => {
                error!(
                    "{} errors occurred during packaging. Refer to the logfile for detailed information.",
                    failures.len()
                );
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
