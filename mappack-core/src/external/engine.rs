//! Command-line packaging engine invocation.

use super::{DocumentPackager, PackageRequest};
use crate::error::{CoreError, CoreResult};

use log::debug;

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Production packager that shells out to the engine executable.
///
/// The engine is invoked once per document and blocks until the
/// package is written; stderr is captured into the failure message.
pub struct CommandPackager {
    program: PathBuf,
}

impl CommandPackager {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn build_command(&self, request: &PackageRequest) -> Command {
        let options = &request.options;
        let mut command = Command::new(&self.program);
        command
            .arg("package")
            .arg(&request.document)
            .arg(&request.package_path)
            .args(["--layers", options.layers.as_token()])
            .args(["--sde", options.sde.as_token()])
            .args(["--compression", options.compression_token()])
            .args(["--extent", &options.extent])
            .args(["--format", options.target.as_token()]);
        if options.overwrite {
            command.arg("--overwrite");
        }
        command.stdin(Stdio::null());
        command
    }
}

impl DocumentPackager for CommandPackager {
    fn package(&self, request: &PackageRequest) -> CoreResult<()> {
        let mut command = self.build_command(request);
        debug!("Invoking packaging engine: {:?}", command);

        let output = command.output().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CoreError::EngineNotFound(self.program.display().to_string())
            } else {
                CoreError::EngineStart(self.program.display().to_string(), e)
            }
        })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut detail = stderr.trim().to_string();
        if detail.is_empty() {
            detail = String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
        if detail.is_empty() {
            Err(CoreError::Packaging(format!(
                "engine exited with {}",
                output.status
            )))
        } else {
            Err(CoreError::Packaging(format!(
                "engine exited with {}: {}",
                output.status, detail
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_command_carries_the_fixed_policy() {
        let packager = CommandPackager::new("arcpkg");
        let request = PackageRequest::new(
            PathBuf::from("/maps/city.mxd"),
            PathBuf::from("/packages/city.mpk"),
        );

        let command = packager.build_command(&request);
        let args: Vec<String> = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(args[0], "package");
        assert!(args.iter().any(|a| a.ends_with("city.mxd")));
        assert!(args.iter().any(|a| a.ends_with("city.mpk")));
        assert!(args.contains(&"PRESERVE".to_string()));
        assert!(args.contains(&"CONVERT_ARCSDE".to_string()));
        assert!(args.contains(&"#".to_string()));
        assert!(args.contains(&"ALL".to_string()));
        assert!(args.contains(&"RUNTIME".to_string()));
        assert!(args.contains(&"--overwrite".to_string()));
    }

    #[test]
    fn build_command_omits_overwrite_when_disabled() {
        let packager = CommandPackager::new("arcpkg");
        let mut request = PackageRequest::new(
            PathBuf::from("/maps/city.mxd"),
            PathBuf::from("/packages/city.mpk"),
        );
        request.options.overwrite = false;

        let command = packager.build_command(&request);
        let args: Vec<String> = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert!(!args.contains(&"--overwrite".to_string()));
    }
}
