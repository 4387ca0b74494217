//! Packaging engine abstraction.
//!
//! The actual map packaging is delegated to an external engine
//! executable. This module defines the request and policy types, the
//! `DocumentPackager` seam the orchestrator works against, and the
//! engine preflight check. Keeping the engine behind a single-method
//! trait allows the orchestrator to be exercised with a scripted fake.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Contains the production engine invocation.
pub mod engine;

/// Contains the scripted packager used by tests (feature `test-mocks`).
pub mod mocks;

pub use engine::CommandPackager;

/// How layers from the source document are carried into the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerHandling {
    /// Keep the source layer structure as-is.
    Preserve,
    /// Convert layers to package-local formats.
    Convert,
}

impl LayerHandling {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Preserve => "PRESERVE",
            Self::Convert => "CONVERT",
        }
    }
}

/// What happens to enterprise geodatabase connections in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdeHandling {
    /// Copy enterprise data into file-based equivalents.
    Convert,
    /// Keep the connections pointing at the enterprise database.
    Preserve,
}

impl SdeHandling {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Convert => "CONVERT_ARCSDE",
            Self::Preserve => "PRESERVE_ARCSDE",
        }
    }
}

/// Consumer the package is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageTarget {
    /// Runtime-consumable package.
    Runtime,
    /// Desktop-consumable package.
    Desktop,
}

impl PackageTarget {
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Runtime => "RUNTIME",
            Self::Desktop => "DESKTOP",
        }
    }
}

/// Engine policy for one packaging call.
///
/// `Default` is the batch export policy: preserve the source layer
/// structure, convert enterprise connections to file-based copies,
/// engine-default compression, full extent, runtime package format,
/// overwrite an existing package at the target path.
#[derive(Debug, Clone)]
pub struct PackageOptions {
    pub layers: LayerHandling,
    pub sde: SdeHandling,
    /// Engine compression token; `None` selects the engine default.
    pub compression: Option<String>,
    /// Extent token, `ALL` for the full document extent.
    pub extent: String,
    pub target: PackageTarget,
    pub overwrite: bool,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            layers: LayerHandling::Preserve,
            sde: SdeHandling::Convert,
            compression: None,
            extent: "ALL".to_string(),
            target: PackageTarget::Runtime,
            overwrite: true,
        }
    }
}

impl PackageOptions {
    /// Compression token passed to the engine; `#` is the engine's
    /// placeholder for its built-in default.
    pub fn compression_token(&self) -> &str {
        self.compression.as_deref().unwrap_or("#")
    }
}

/// One packaging call: source document, target package, policy.
#[derive(Debug, Clone)]
pub struct PackageRequest {
    pub document: PathBuf,
    pub package_path: PathBuf,
    pub options: PackageOptions,
}

impl PackageRequest {
    /// Request with the default batch policy.
    pub fn new(document: PathBuf, package_path: PathBuf) -> Self {
        Self {
            document,
            package_path,
            options: PackageOptions::default(),
        }
    }
}

/// Seam between the export orchestrator and the packaging engine.
pub trait DocumentPackager {
    /// Packages one document, producing the archive at
    /// `request.package_path`.
    fn package(&self, request: &PackageRequest) -> CoreResult<()>;
}

/// Checks that the packaging engine can be started.
///
/// Runs the engine with `--version` and discards its output. A missing
/// executable is `CoreError::EngineNotFound`; an executable that exists
/// but cannot be started is `CoreError::EngineStart`.
pub fn check_engine(program: &Path) -> CoreResult<()> {
    let result = Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found packaging engine: {}", program.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Packaging engine '{}' not found.", program.display());
            Err(CoreError::EngineNotFound(program.display().to_string()))
        }
        Err(e) => {
            log::error!(
                "Failed to start packaging engine '{}': {}",
                program.display(),
                e
            );
            Err(CoreError::EngineStart(program.display().to_string(), e))
        }
    }
}
