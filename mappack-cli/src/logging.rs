// mappack-cli/src/logging.rs
//
// Console logging setup. Diagnostics go through the standard `log`
// facade with `env_logger` as the backend; the per-run export log file
// is written by mappack-core and is not part of this pipeline.
//
// The application honors the RUST_LOG environment variable:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug: Detailed debugging information

/// Initializes env_logger.
///
/// `RUST_LOG` wins when set; otherwise the default level is info, or
/// debug when `--verbose` was given.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
