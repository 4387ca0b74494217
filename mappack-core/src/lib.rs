//! Core library for batch map document packaging.
//!
//! This crate provides discovery of map documents, the packaging-engine
//! abstraction, forced cleanup of leftover staging directories and the
//! per-run export log used by the `mappack` command-line tool.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mappack_core::{CoreConfig, run_export, RunOutcome};
//! use mappack_core::external::CommandPackager;
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(
//!     PathBuf::from("/path/to/documents"),
//!     PathBuf::from("/path/to/packages"),
//!     PathBuf::from("/path/to/logs"),
//! );
//!
//! let packager = CommandPackager::new(&config.engine_program);
//! match run_export(&packager, &config).unwrap() {
//!     RunOutcome::NoInput => println!("nothing to do"),
//!     RunOutcome::Completed { exported, failures } => {
//!         println!("{} packaged, {} failed", exported.len(), failures.len());
//!     }
//! }
//! ```

pub mod cleanup;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export_log;
pub mod external;
pub mod processing;
pub mod utils;
pub mod validate;

// Re-exports for public API
pub use cleanup::force_remove_tree;
pub use config::CoreConfig;
pub use discovery::find_map_documents;
pub use error::{CoreError, CoreResult};
pub use processing::run_export;
pub use utils::{format_bytes, format_duration};
pub use validate::ensure_directory;

use std::path::PathBuf;
use std::time::Duration;

/// Statistics for one successfully packaged document.
///
/// Collected by `run_export` for every document the engine accepted.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub document: String,
    pub package_path: PathBuf,
    pub package_size: u64,
    pub duration: Duration,
}

/// One failure recorded against a document during a run.
///
/// Mirrors an error block in the export log file.
#[derive(Debug, Clone)]
pub struct ExportFailure {
    pub document: String,
    pub message: String,
}

/// Terminal state of one export run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The input directory contained no map documents; the batch never ran.
    NoInput,
    /// The batch ran to the end, successes and failures side by side.
    Completed {
        exported: Vec<ExportReport>,
        failures: Vec<ExportFailure>,
    },
}

impl RunOutcome {
    /// True when the run recorded at least one per-document failure.
    pub fn has_failures(&self) -> bool {
        matches!(self, RunOutcome::Completed { failures, .. } if !failures.is_empty())
    }
}
