// mappack-core/src/external/mocks.rs

// --- Mocking infrastructure (for testing) ---

// This module is only compiled when the "test-mocks" feature is enabled.
#![cfg(feature = "test-mocks")]

use super::{DocumentPackager, PackageRequest};
use crate::error::{CoreError, CoreResult};

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::rc::Rc;

/// Scripted outcome for one document name.
enum Scripted {
    Success {
        create_package: bool,
        leftover_dir: bool,
    },
    Failure(String),
}

/// Mock packager driven by per-document scripts.
///
/// Each document name maps to a scripted outcome; a request for an
/// unscripted document panics, which surfaces missing expectations
/// immediately in tests.
#[derive(Clone, Default)]
pub struct MockPackager {
    scripts: Rc<RefCell<HashMap<String, Scripted>>>,
    received: Rc<RefCell<Vec<PackageRequest>>>,
}

impl MockPackager {
    pub fn new() -> Self {
        Default::default()
    }

    /// Scripts a successful export that writes a dummy package file.
    pub fn succeed_for(&self, document: &str) {
        self.scripts.borrow_mut().insert(
            document.to_string(),
            Scripted::Success {
                create_package: true,
                leftover_dir: false,
            },
        );
    }

    /// Scripts a success that also leaves a same-named staging
    /// directory next to the package, the way the real engine does on
    /// some documents.
    pub fn succeed_with_leftover_for(&self, document: &str) {
        self.scripts.borrow_mut().insert(
            document.to_string(),
            Scripted::Success {
                create_package: true,
                leftover_dir: true,
            },
        );
    }

    /// Scripts an engine failure with the given message.
    pub fn fail_for(&self, document: &str, message: &str) {
        self.scripts
            .borrow_mut()
            .insert(document.to_string(), Scripted::Failure(message.to_string()));
    }

    /// Requests seen so far, in call order.
    pub fn received_requests(&self) -> Vec<PackageRequest> {
        self.received.borrow().clone()
    }
}

impl DocumentPackager for MockPackager {
    fn package(&self, request: &PackageRequest) -> CoreResult<()> {
        self.received.borrow_mut().push(request.clone());

        let name = request
            .document
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let scripts = self.scripts.borrow();
        match scripts.get(&name) {
            Some(Scripted::Success {
                create_package,
                leftover_dir,
            }) => {
                if *create_package {
                    if let Some(parent) = request.package_path.parent() {
                        let _ = fs::create_dir_all(parent);
                    }
                    fs::write(&request.package_path, b"mock package")?;
                }
                if *leftover_dir {
                    let staging = request.package_path.with_extension("");
                    fs::create_dir_all(&staging)?;
                    fs::write(staging.join("scratch.dat"), b"staging leftovers")?;
                }
                Ok(())
            }
            Some(Scripted::Failure(message)) => Err(CoreError::Packaging(message.clone())),
            None => panic!("MockPackager: no script for document '{name}'"),
        }
    }
}
