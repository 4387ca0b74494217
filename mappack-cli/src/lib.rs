// mappack-cli/src/lib.rs
//
// Library portion of the Mappack CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod prompt;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, ExportArgs};
pub use commands::export::run_export_command;
