//! Blocking console prompts for interactive directory resolution.

use crate::error::CliResult;

use std::io::{self, Write};

/// Prints `message` and reads one trimmed line from stdin.
///
/// Blocks until the operator answers; used only outside silent mode.
pub fn prompt_line(message: &str) -> CliResult<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
