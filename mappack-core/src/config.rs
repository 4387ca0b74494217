//! Configuration structure and constants for the mappack-core library.
//!
//! This module provides the run configuration consumed by `run_export`,
//! along with the file-format constants shared between the library and
//! the command-line front-end.

use std::path::PathBuf;

// Default constants

/// File extension of source map documents, matched case-insensitively.
pub const DOCUMENT_EXTENSION: &str = "mxd";

/// File extension of the generated map packages.
pub const PACKAGE_EXTENSION: &str = "mpk";

/// Default export log file name. The file created on disk is prefixed
/// with the run date: `{date}__{log_name}`.
pub const DEFAULT_LOG_NAME: &str = "mpk_export.log";

/// Default executable name of the external packaging engine, resolved
/// through `PATH` when no explicit path is configured.
pub const DEFAULT_ENGINE_PROGRAM: &str = "arcpkg";

/// Main configuration structure for the mappack-core library.
///
/// Holds the three working directories plus the log and engine settings
/// for one run. It is created by the consumer of the library (the CLI)
/// and is immutable once handed to `run_export`.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory containing the source map documents to export
    pub input_dir: PathBuf,

    /// Directory the map packages are written to
    pub output_dir: PathBuf,

    /// Directory the export log is created in
    pub log_dir: PathBuf,

    /// Export log file name, prefixed with the run date at creation time
    pub log_name: String,

    /// Packaging engine executable to invoke
    pub engine_program: PathBuf,
}

impl CoreConfig {
    /// Creates a configuration with the given directories and the
    /// default log name and engine program.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, log_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_dir,
            log_dir,
            log_name: DEFAULT_LOG_NAME.to_string(),
            engine_program: PathBuf::from(DEFAULT_ENGINE_PROGRAM),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("."), PathBuf::from("."), PathBuf::from("."))
    }
}
